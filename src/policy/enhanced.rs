//! Request dispatcher behind `/api/model/{model}/{operation}[/{id}]`.
//!
//! An [`EnhancedClient`] is built per request for the calling user. It parses
//! the model and operation, applies the rule table from [`super::schema`]
//! and, when allowed, runs the operation through the `api` layer. Owner
//! rules narrow reads to the caller's pets and reject writes on rows of
//! other owners.

use ntex::http::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{
    error::PolicyError,
    schema::{self, Access, Model, Operation},
};
use crate::{api, consts, metric, models, repo};

/// `?skip=&take=` of a `findMany`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FindManyArgs {
    pub skip: Option<u32>,
    pub take: Option<u32>,
}

impl FindManyArgs {
    fn take(&self) -> u32 {
        self.take
            .unwrap_or(consts::MODEL_FIND_MANY_MAX)
            .clamp(1, consts::MODEL_FIND_MANY_MAX)
    }

    fn pagination(&self) -> models::pagination::Pagination {
        let take = self.take();
        let skip = self.skip.unwrap_or_default();

        models::pagination::Pagination {
            page: skip / take + 1,
            limit: take,
            skip,
        }
    }

    /// Applies skip/take to rows filtered in memory
    fn window<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.skip.unwrap_or_default() as usize)
            .take(self.take() as usize)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub method: Method,
    pub model: String,
    pub operation: String,
    pub id: Option<String>,
    pub args: FindManyArgs,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse {
    pub operation: Operation,
    pub data: serde_json::Value,
}

fn to_data<T: Serialize>(value: T) -> Result<serde_json::Value, PolicyError> {
    serde_json::to_value(value).map_err(|e| PolicyError::Internal(e.to_string()))
}

fn from_body<T: DeserializeOwned>(body: Option<serde_json::Value>) -> Result<T, PolicyError> {
    let body = body.ok_or_else(|| PolicyError::InvalidInput("request body is required".into()))?;
    serde_json::from_value(body).map_err(|e| PolicyError::InvalidInput(e.to_string()))
}

pub struct EnhancedClient<'a> {
    repo: &'a repo::ImplAppRepo,
    user: models::user_app::AuthUser,
}

impl<'a> EnhancedClient<'a> {
    pub fn new(repo: &'a repo::ImplAppRepo, user: models::user_app::AuthUser) -> Self {
        Self { repo, user }
    }

    /// Authorizes and runs one model request
    pub async fn handle(&self, request: ModelRequest) -> Result<ModelResponse, PolicyError> {
        let model: Model = request.model.parse()?;
        let operation: Operation = request.operation.parse()?;

        if !operation.accepts_method(&request.method) {
            return Err(PolicyError::UnknownOperation(format!(
                "{operation} via {}",
                request.method
            )));
        }

        let rule = schema::policy_for(model).rule(operation.kind());
        let access = schema::evaluate(rule, &self.user)?;
        log::debug!(
            "user {} {operation} on {model}: {rule:?} -> {access:?}",
            self.user.id
        );

        let ModelRequest { id, args, body, .. } = request;
        let required_id =
            || id.clone().ok_or_else(|| PolicyError::InvalidInput("id is required".into()));

        let data = match operation {
            Operation::FindMany => self.find_many(model, access, &args).await?,
            Operation::FindUnique => self.find_unique(model, access, &required_id()?).await?,
            Operation::Create => self.create(model, access, body).await?,
            Operation::Update => self.update(model, access, &required_id()?, body).await?,
            Operation::Delete => self.delete(model, access, &required_id()?).await?,
        };

        metric::incr_model_operation_statds(&model.to_string(), &operation.to_string());

        Ok(ModelResponse { operation, data })
    }

    /// Rejects writes on a pet the caller does not own
    async fn ensure_owns_pet(&self, pet_id: &str) -> Result<(), PolicyError> {
        let pet = api::pet::get_pet(pet_id, self.repo).await?;
        if !self.user.owns(&pet.owner_id) {
            return Err(PolicyError::Forbidden("pet belongs to another owner".into()));
        }
        Ok(())
    }

    /// Hides rows of other owners from reads
    async fn ensure_visible(&self, pet_id: &str, entity: &str) -> Result<(), PolicyError> {
        let pet = api::pet::get_pet(pet_id, self.repo).await?;
        if !self.user.owns(&pet.owner_id) {
            return Err(PolicyError::NotFound(entity.to_string()));
        }
        Ok(())
    }

    async fn find_many(
        &self,
        model: Model,
        access: Access,
        args: &FindManyArgs,
    ) -> Result<serde_json::Value, PolicyError> {
        let repo = self.repo;
        let pagination = args.pagination();

        match (model, access) {
            (Model::Pet, Access::OwnedOnly) => {
                to_data(args.window(api::pet::get_my_pets(&self.user, repo).await?))
            }
            (Model::Pet, Access::All) => to_data(api::pet::list_pets(&pagination, repo).await?.items),
            (Model::Medicine, _) => {
                to_data(api::medicine::list_medicines(&pagination, repo).await?.items)
            }
            (Model::MedicationPackage, _) => to_data(
                api::medication_package::list_medication_packages(&pagination, repo)
                    .await?
                    .items,
            ),
            (Model::Prescription, _) => to_data(
                api::prescription::list_prescriptions(&pagination, repo)
                    .await?
                    .items,
            ),
            (Model::Room, _) => to_data(api::room::list_rooms(&pagination, repo).await?.items),
            (Model::ServiceOption, _) => {
                to_data(args.window(api::service_option::list_service_options(repo).await?))
            }
            (Model::ServiceBooking, Access::OwnedOnly) => {
                let mut bookings = Vec::new();
                for pet in api::pet::get_my_pets(&self.user, repo).await? {
                    bookings.extend(
                        api::service_booking::get_service_bookings_by_pet(&pet.id, repo).await?,
                    );
                }
                bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
                to_data(args.window(bookings))
            }
            (Model::ServiceBooking, Access::All) => to_data(
                api::service_booking::list_service_bookings(&pagination, repo)
                    .await?
                    .items,
            ),
            (Model::BoardingReservation, Access::OwnedOnly) => {
                let mut reservations = Vec::new();
                for pet in api::pet::get_my_pets(&self.user, repo).await? {
                    reservations.extend(
                        api::boarding_reservation::get_boarding_reservations_by_pet(&pet.id, repo)
                            .await?,
                    );
                }
                reservations.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                to_data(args.window(reservations))
            }
            (Model::BoardingReservation, Access::All) => to_data(
                api::boarding_reservation::list_boarding_reservations(&pagination, repo)
                    .await?
                    .items,
            ),
            // always scoped to the caller, staff included
            (Model::Notification, _) => to_data(
                args.window(api::notification::get_my_notifications(&self.user, repo).await?),
            ),
        }
    }

    async fn find_unique(
        &self,
        model: Model,
        access: Access,
        id: &str,
    ) -> Result<serde_json::Value, PolicyError> {
        let repo = self.repo;
        let owned_only = access == Access::OwnedOnly;

        match model {
            Model::Pet => {
                let pet = api::pet::get_pet(id, repo).await?;
                if owned_only && !self.user.owns(&pet.owner_id) {
                    return Err(PolicyError::NotFound("pet".into()));
                }
                to_data(pet)
            }
            Model::Medicine => to_data(api::medicine::get_medicine(id, repo).await?),
            Model::MedicationPackage => to_data(
                api::medication_package::get_medication_package(id, repo).await?,
            ),
            Model::Prescription => to_data(api::prescription::get_prescription(id, repo).await?),
            Model::Room => to_data(api::room::get_room(id, repo).await?),
            Model::ServiceOption => {
                to_data(api::service_option::get_service_option(id, repo).await?)
            }
            Model::ServiceBooking => {
                let booking = api::service_booking::get_service_booking(id, repo).await?;
                if owned_only {
                    self.ensure_visible(&booking.pet_id, "service booking").await?;
                }
                to_data(booking)
            }
            Model::BoardingReservation => {
                let reservation =
                    api::boarding_reservation::get_boarding_reservation(id, repo).await?;
                if owned_only {
                    self.ensure_visible(&reservation.pet_id, "boarding reservation")
                        .await?;
                }
                to_data(reservation)
            }
            Model::Notification => {
                let notification = api::notification::get_my_notifications(&self.user, repo)
                    .await?
                    .into_iter()
                    .find(|notification| notification.id == id)
                    .ok_or_else(|| PolicyError::NotFound("notification".into()))?;
                to_data(notification)
            }
        }
    }

    async fn create(
        &self,
        model: Model,
        access: Access,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, PolicyError> {
        let repo = self.repo;
        let owned_only = access == Access::OwnedOnly;

        match model {
            Model::Pet => to_data(
                api::pet::add_new_pet_to_user(&self.user.id, from_body(body)?, repo).await?,
            ),
            Model::Medicine => to_data(api::medicine::create_medicine(from_body(body)?, repo).await?),
            Model::MedicationPackage => to_data(
                api::medication_package::create_medication_package(from_body(body)?, repo).await?,
            ),
            Model::Prescription => to_data(
                api::prescription::create_prescription(from_body(body)?, repo).await?,
            ),
            Model::Room => to_data(api::room::create_room(from_body(body)?, repo).await?),
            Model::ServiceOption => to_data(
                api::service_option::create_service_option(from_body(body)?, repo).await?,
            ),
            Model::ServiceBooking => {
                let payload: models::service_booking::ServiceBookingPayload = from_body(body)?;
                if owned_only {
                    self.ensure_owns_pet(&payload.pet_id).await?;
                }
                to_data(api::service_booking::create_service_booking(payload, repo).await?)
            }
            Model::BoardingReservation => {
                let payload: models::boarding_reservation::BoardingReservationPayload =
                    from_body(body)?;
                if owned_only {
                    self.ensure_owns_pet(&payload.pet_id).await?;
                }
                to_data(api::boarding_reservation::create_boarding_reservation(payload, repo).await?)
            }
            Model::Notification => to_data(
                api::notification::create_notification(from_body(body)?, repo).await?,
            ),
        }
    }

    async fn update(
        &self,
        model: Model,
        access: Access,
        id: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, PolicyError> {
        let repo = self.repo;
        let owned_only = access == Access::OwnedOnly;

        match model {
            Model::Pet => {
                if owned_only {
                    self.ensure_owns_pet(id).await?;
                }
                to_data(api::pet::update_pet(id, from_body(body)?, repo).await?)
            }
            Model::Medicine => {
                to_data(api::medicine::update_medicine(id, from_body(body)?, repo).await?)
            }
            Model::MedicationPackage => to_data(
                api::medication_package::update_medication_package(id, from_body(body)?, repo)
                    .await?,
            ),
            Model::Prescription => to_data(
                api::prescription::update_prescription(id, from_body(body)?, repo).await?,
            ),
            Model::Room => to_data(api::room::update_room(id, from_body(body)?, repo).await?),
            Model::ServiceOption => to_data(
                api::service_option::update_service_option(id, from_body(body)?, repo).await?,
            ),
            Model::ServiceBooking => {
                if owned_only {
                    let booking = api::service_booking::get_service_booking(id, repo).await?;
                    self.ensure_owns_pet(&booking.pet_id).await?;
                }
                to_data(
                    api::service_booking::update_service_booking(id, from_body(body)?, repo)
                        .await?,
                )
            }
            Model::BoardingReservation => {
                if owned_only {
                    let reservation =
                        api::boarding_reservation::get_boarding_reservation(id, repo).await?;
                    self.ensure_owns_pet(&reservation.pet_id).await?;
                }
                to_data(
                    api::boarding_reservation::update_boarding_reservation(
                        id,
                        from_body(body)?,
                        repo,
                    )
                    .await?,
                )
            }
            Model::Notification => to_data(
                api::notification::update_notification(id, from_body(body)?, repo).await?,
            ),
        }
    }

    async fn delete(
        &self,
        model: Model,
        access: Access,
        id: &str,
    ) -> Result<serde_json::Value, PolicyError> {
        let repo = self.repo;
        let owned_only = access == Access::OwnedOnly;

        match model {
            Model::Pet => {
                if owned_only {
                    self.ensure_owns_pet(id).await?;
                }
                api::pet::delete_pet(id, repo).await?;
            }
            Model::Medicine => api::medicine::delete_medicine(id, repo).await?,
            Model::MedicationPackage => {
                api::medication_package::delete_medication_package(id, repo).await?
            }
            Model::Prescription => api::prescription::delete_prescription(id, repo).await?,
            Model::Room => api::room::delete_room(id, repo).await?,
            Model::ServiceOption => api::service_option::delete_service_option(id, repo).await?,
            Model::ServiceBooking => {
                if owned_only {
                    let booking = api::service_booking::get_service_booking(id, repo).await?;
                    self.ensure_owns_pet(&booking.pet_id).await?;
                }
                api::service_booking::delete_service_booking(id, repo).await?;
            }
            Model::BoardingReservation => {
                if owned_only {
                    let reservation =
                        api::boarding_reservation::get_boarding_reservation(id, repo).await?;
                    self.ensure_owns_pet(&reservation.pet_id).await?;
                }
                api::boarding_reservation::delete_boarding_reservation(id, repo).await?;
            }
            Model::Notification => api::notification::delete_notification(id, repo).await?,
        }

        Ok(serde_json::Value::Null)
    }
}
