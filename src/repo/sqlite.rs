use crate::models;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};
use std::str::FromStr;

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

/// Decimals are stored as TEXT, sqlite has no exact numeric type
fn decimal_column(row: &SqliteRow, column: &str) -> sqlx::Result<Decimal> {
    let raw: String = row.try_get(column)?;
    Decimal::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn medicine_from_row(row: &SqliteRow, prefix: &str) -> sqlx::Result<models::medicine::Medicine> {
    Ok(models::medicine::Medicine {
        id: row.try_get(format!("{prefix}id").as_str())?,
        name: row.try_get(format!("{prefix}name").as_str())?,
        concentration: row.try_get(format!("{prefix}concentration").as_str())?,
        unit: row.try_get(format!("{prefix}unit").as_str())?,
        description: row.try_get(format!("{prefix}description").as_str())?,
        manufacturer: row.try_get(format!("{prefix}manufacturer").as_str())?,
        price: decimal_column(row, &format!("{prefix}price"))?,
        created_at: row.try_get(format!("{prefix}created_at").as_str())?,
        updated_at: row.try_get(format!("{prefix}updated_at").as_str())?,
    })
}

fn medication_package_from_row(
    row: &SqliteRow,
    prefix: &str,
) -> sqlx::Result<models::medication_package::MedicationPackage> {
    Ok(models::medication_package::MedicationPackage {
        id: row.try_get(format!("{prefix}id").as_str())?,
        medicine_id: row.try_get(format!("{prefix}medicine_id").as_str())?,
        package_name: row.try_get(format!("{prefix}package_name").as_str())?,
        quantity: row.try_get(format!("{prefix}quantity").as_str())?,
        unit_price: decimal_column(row, &format!("{prefix}unit_price"))?,
        batch_number: row.try_get(format!("{prefix}batch_number").as_str())?,
        expiry_date: row.try_get(format!("{prefix}expiry_date").as_str())?,
        created_at: row.try_get(format!("{prefix}created_at").as_str())?,
        updated_at: row.try_get(format!("{prefix}updated_at").as_str())?,
        medicine: Some(medicine_from_row(row, "m_")?),
    })
}

fn room_from_row(row: &SqliteRow, prefix: &str, id_column: &str) -> sqlx::Result<models::room::Room> {
    Ok(models::room::Room {
        id: row.try_get(id_column)?,
        name: row.try_get(format!("{prefix}name").as_str())?,
        room_type: row.try_get(format!("{prefix}room_type").as_str())?,
        capacity: row.try_get(format!("{prefix}capacity").as_str())?,
        price_per_day: decimal_column(row, &format!("{prefix}price_per_day"))?,
        status: row.try_get(format!("{prefix}status").as_str())?,
        description: row.try_get(format!("{prefix}description").as_str())?,
        created_at: row.try_get(format!("{prefix}created_at").as_str())?,
        updated_at: row.try_get(format!("{prefix}updated_at").as_str())?,
    })
}

fn pet_summary_from_row(row: &SqliteRow) -> sqlx::Result<models::pet::PetSummary> {
    Ok(models::pet::PetSummary {
        id: row.try_get("pet_id")?,
        owner_id: row.try_get("pet_owner_id")?,
        name: row.try_get("pet_name")?,
        species: row.try_get("pet_species")?,
    })
}

impl FromRow<'_, SqliteRow> for models::medicine::Medicine {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        medicine_from_row(row, "")
    }
}

impl FromRow<'_, SqliteRow> for models::medication_package::MedicationPackage {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        medication_package_from_row(row, "")
    }
}

impl FromRow<'_, SqliteRow> for models::room::Room {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        room_from_row(row, "", "id")
    }
}

impl FromRow<'_, SqliteRow> for models::booking::ServiceOption {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: decimal_column(row, "price")?,
            duration_minutes: row.try_get("duration_minutes")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::prescription::Prescription {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            medical_record_id: row.try_get("medical_record_id")?,
            notes: row.try_get("notes")?,
            prescribed_at: row.try_get("prescribed_at")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            details: vec![],
        })
    }
}

impl FromRow<'_, SqliteRow> for models::prescription::PrescriptionDetail {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            prescription_id: row.try_get("prescription_id")?,
            medication_package_id: row.try_get("medication_package_id")?,
            quantity: row.try_get("quantity")?,
            dosage: row.try_get("dosage")?,
            instructions: row.try_get("instructions")?,
            medication_package: Some(medication_package_from_row(row, "p_")?),
        })
    }
}

impl FromRow<'_, SqliteRow> for models::service_booking::ServiceBooking {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        let service_option_id: String = row.try_get("service_option_id")?;

        Ok(Self {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            booking_date: row.try_get("booking_date")?,
            status: row.try_get("status")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            pet: Some(pet_summary_from_row(row)?),
            service_option: Some(models::booking::ServiceOption {
                id: service_option_id.clone(),
                name: row.try_get("so_name")?,
                price: decimal_column(row, "so_price")?,
                duration_minutes: row.try_get("so_duration_minutes")?,
            }),
            service_option_id,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::boarding_reservation::BoardingReservation {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            room_id: row.try_get("room_id")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            status: row.try_get("status")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            pet: Some(pet_summary_from_row(row)?),
            room: Some(room_from_row(row, "r_", "room_id")?),
        })
    }
}

impl SqlxSqliteRepo {
    async fn count_rows(&self, table: &'static str) -> anyhow::Result<i64> {
        Ok(
            sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table};"))
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn delete_by_id(&self, table: &'static str, id: &str) -> anyhow::Result<bool> {
        Ok(sqlx::query(&format!("DELETE FROM {table} WHERE id=$1;"))
            .bind(id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn fetch_page<T>(
        &self,
        query: &str,
        table: &'static str,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let items = sqlx::query_as::<_, T>(query)
            .bind(i64::from(pagination.limit))
            .bind(i64::from(pagination.skip))
            .fetch_all(&self.db_pool)
            .await?;
        let total = self.count_rows(table).await?;

        Ok(models::envelope::Page {
            items,
            meta: models::envelope::PageMeta::new(total, pagination),
        })
    }

    async fn attach_details(
        &self,
        mut prescription: models::prescription::Prescription,
    ) -> anyhow::Result<models::prescription::Prescription> {
        prescription.details = self.get_prescription_details(&prescription.id).await?;
        Ok(prescription)
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<models::user_app::User>> {
        Ok(
            sqlx::query_as::<_, models::user_app::User>(sqlite_queries::QUERY_GET_USER)
                .bind(user_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_user(&self, user: &models::user_app::User) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_USER)
            .bind(&user.id)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(user.account_role.to_string())
            .bind(user.created_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn get_pets_by_owner(&self, owner_id: &str) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PETS_BY_OWNER)
                .bind(owner_id)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn list_pets(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::pet::Pet>> {
        self.fetch_page(sqlite_queries::QUERY_LIST_PETS, "pet", pagination)
            .await
    }

    async fn get_pet(&self, pet_id: &str) -> anyhow::Result<Option<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PET)
                .bind(pet_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PET)
            .bind(&pet.id)
            .bind(&pet.owner_id)
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(&pet.breed)
            .bind(pet.birth_date)
            .bind(pet.created_at)
            .bind(pet.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_PET)
            .bind(&pet.id)
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(&pet.breed)
            .bind(pet.birth_date)
            .bind(pet.updated_at)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_pet(&self, pet_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("pet", pet_id).await
    }

    async fn list_medicines(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::medicine::Medicine>> {
        self.fetch_page(sqlite_queries::QUERY_LIST_MEDICINES, "medicine", pagination)
            .await
    }

    async fn get_medicine(
        &self,
        medicine_id: &str,
    ) -> anyhow::Result<Option<models::medicine::Medicine>> {
        Ok(
            sqlx::query_as::<_, models::medicine::Medicine>(sqlite_queries::QUERY_GET_MEDICINE)
                .bind(medicine_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_medicine(&self, medicine: &models::medicine::Medicine) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_MEDICINE)
            .bind(&medicine.id)
            .bind(&medicine.name)
            .bind(&medicine.concentration)
            .bind(&medicine.unit)
            .bind(&medicine.description)
            .bind(&medicine.manufacturer)
            .bind(medicine.price.to_string())
            .bind(medicine.created_at)
            .bind(medicine.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_medicine(
        &self,
        medicine: &models::medicine::Medicine,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_MEDICINE)
            .bind(&medicine.id)
            .bind(&medicine.name)
            .bind(&medicine.concentration)
            .bind(&medicine.unit)
            .bind(&medicine.description)
            .bind(&medicine.manufacturer)
            .bind(medicine.price.to_string())
            .bind(medicine.updated_at)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_medicine(&self, medicine_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("medicine", medicine_id).await
    }

    async fn list_medication_packages(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::medication_package::MedicationPackage>>
    {
        self.fetch_page(
            &sqlite_queries::query_list_medication_packages(),
            "medication_package",
            pagination,
        )
        .await
    }

    async fn get_medication_package(
        &self,
        package_id: &str,
    ) -> anyhow::Result<Option<models::medication_package::MedicationPackage>> {
        Ok(sqlx::query_as::<_, models::medication_package::MedicationPackage>(
            &sqlite_queries::query_get_medication_package(),
        )
        .bind(package_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn get_medication_packages_by_medicine(
        &self,
        medicine_id: &str,
    ) -> anyhow::Result<Vec<models::medication_package::MedicationPackage>> {
        Ok(sqlx::query_as::<_, models::medication_package::MedicationPackage>(
            &sqlite_queries::query_get_medication_packages_by_medicine(),
        )
        .bind(medicine_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn insert_medication_package(
        &self,
        package: &models::medication_package::MedicationPackage,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_MEDICATION_PACKAGE)
            .bind(&package.id)
            .bind(&package.medicine_id)
            .bind(&package.package_name)
            .bind(package.quantity)
            .bind(package.unit_price.to_string())
            .bind(&package.batch_number)
            .bind(package.expiry_date)
            .bind(package.created_at)
            .bind(package.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_medication_package(
        &self,
        package: &models::medication_package::MedicationPackage,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_MEDICATION_PACKAGE)
            .bind(&package.id)
            .bind(&package.medicine_id)
            .bind(&package.package_name)
            .bind(package.quantity)
            .bind(package.unit_price.to_string())
            .bind(&package.batch_number)
            .bind(package.expiry_date)
            .bind(package.updated_at)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_medication_package(&self, package_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("medication_package", package_id).await
    }

    async fn get_medical_record(
        &self,
        medical_record_id: &str,
    ) -> anyhow::Result<Option<models::prescription::MedicalRecord>> {
        Ok(sqlx::query_as::<_, models::prescription::MedicalRecord>(
            sqlite_queries::QUERY_GET_MEDICAL_RECORD,
        )
        .bind(medical_record_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn list_prescriptions(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::prescription::Prescription>> {
        let page: models::envelope::Page<models::prescription::Prescription> = self
            .fetch_page(
                sqlite_queries::QUERY_LIST_PRESCRIPTIONS,
                "prescription",
                pagination,
            )
            .await?;

        let mut items = Vec::with_capacity(page.items.len());
        for prescription in page.items {
            items.push(self.attach_details(prescription).await?);
        }

        Ok(models::envelope::Page {
            items,
            meta: page.meta,
        })
    }

    async fn get_prescription(
        &self,
        prescription_id: &str,
    ) -> anyhow::Result<Option<models::prescription::Prescription>> {
        let prescription = sqlx::query_as::<_, models::prescription::Prescription>(
            sqlite_queries::QUERY_GET_PRESCRIPTION,
        )
        .bind(prescription_id)
        .fetch_optional(&self.db_pool)
        .await?;

        match prescription {
            Some(prescription) => Ok(Some(self.attach_details(prescription).await?)),
            None => Ok(None),
        }
    }

    async fn get_prescriptions_by_medical_record(
        &self,
        medical_record_id: &str,
    ) -> anyhow::Result<Vec<models::prescription::Prescription>> {
        let prescriptions = sqlx::query_as::<_, models::prescription::Prescription>(
            sqlite_queries::QUERY_GET_PRESCRIPTIONS_BY_MEDICAL_RECORD,
        )
        .bind(medical_record_id)
        .fetch_all(&self.db_pool)
        .await?;

        let mut items = Vec::with_capacity(prescriptions.len());
        for prescription in prescriptions {
            items.push(self.attach_details(prescription).await?);
        }
        Ok(items)
    }

    async fn insert_prescription(
        &self,
        prescription: &models::prescription::Prescription,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PRESCRIPTION)
            .bind(&prescription.id)
            .bind(&prescription.medical_record_id)
            .bind(&prescription.notes)
            .bind(prescription.prescribed_at)
            .bind(prescription.created_at)
            .bind(prescription.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_prescription(
        &self,
        prescription: &models::prescription::Prescription,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_PRESCRIPTION)
            .bind(&prescription.id)
            .bind(&prescription.medical_record_id)
            .bind(&prescription.notes)
            .bind(prescription.prescribed_at)
            .bind(prescription.updated_at)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_prescription(&self, prescription_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("prescription", prescription_id).await
    }

    async fn get_prescription_details(
        &self,
        prescription_id: &str,
    ) -> anyhow::Result<Vec<models::prescription::PrescriptionDetail>> {
        Ok(sqlx::query_as::<_, models::prescription::PrescriptionDetail>(
            &sqlite_queries::query_get_prescription_details(),
        )
        .bind(prescription_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_prescription_detail(
        &self,
        prescription_id: &str,
        package_id: &str,
    ) -> anyhow::Result<Option<models::prescription::PrescriptionDetail>> {
        Ok(sqlx::query_as::<_, models::prescription::PrescriptionDetail>(
            &sqlite_queries::query_get_prescription_detail(),
        )
        .bind(prescription_id)
        .bind(package_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_prescription_detail(
        &self,
        detail: &models::prescription::PrescriptionDetail,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PRESCRIPTION_DETAIL)
            .bind(&detail.prescription_id)
            .bind(&detail.medication_package_id)
            .bind(detail.quantity)
            .bind(&detail.dosage)
            .bind(&detail.instructions)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_prescription_detail(
        &self,
        detail: &models::prescription::PrescriptionDetail,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_PRESCRIPTION_DETAIL)
            .bind(&detail.prescription_id)
            .bind(&detail.medication_package_id)
            .bind(detail.quantity)
            .bind(&detail.dosage)
            .bind(&detail.instructions)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_prescription_detail(
        &self,
        prescription_id: &str,
        package_id: &str,
    ) -> anyhow::Result<bool> {
        Ok(
            sqlx::query(sqlite_queries::QUERY_DELETE_PRESCRIPTION_DETAIL)
                .bind(prescription_id)
                .bind(package_id)
                .execute(&self.db_pool)
                .await?
                .rows_affected()
                > 0,
        )
    }

    async fn list_rooms(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::room::Room>> {
        self.fetch_page(sqlite_queries::QUERY_LIST_ROOMS, "room", pagination)
            .await
    }

    async fn get_room(&self, room_id: &str) -> anyhow::Result<Option<models::room::Room>> {
        Ok(
            sqlx::query_as::<_, models::room::Room>(sqlite_queries::QUERY_GET_ROOM)
                .bind(room_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_available_rooms(
        &self,
        window: &models::room::AvailabilityWindow,
    ) -> anyhow::Result<Vec<models::room::Room>> {
        Ok(
            sqlx::query_as::<_, models::room::Room>(sqlite_queries::QUERY_GET_AVAILABLE_ROOMS)
                .bind(window.start_date)
                .bind(window.end_date)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn insert_room(&self, room: &models::room::Room) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_ROOM)
            .bind(&room.id)
            .bind(&room.name)
            .bind(room.room_type.to_string())
            .bind(room.capacity)
            .bind(room.price_per_day.to_string())
            .bind(room.status.to_string())
            .bind(&room.description)
            .bind(room.created_at)
            .bind(room.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_room(&self, room: &models::room::Room) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_ROOM)
            .bind(&room.id)
            .bind(&room.name)
            .bind(room.room_type.to_string())
            .bind(room.capacity)
            .bind(room.price_per_day.to_string())
            .bind(room.status.to_string())
            .bind(&room.description)
            .bind(room.updated_at)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_room(&self, room_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("room", room_id).await
    }

    async fn list_service_options(&self) -> anyhow::Result<Vec<models::booking::ServiceOption>> {
        Ok(sqlx::query_as::<_, models::booking::ServiceOption>(
            sqlite_queries::QUERY_LIST_SERVICE_OPTIONS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_service_option(
        &self,
        service_option_id: &str,
    ) -> anyhow::Result<Option<models::booking::ServiceOption>> {
        Ok(sqlx::query_as::<_, models::booking::ServiceOption>(
            sqlite_queries::QUERY_GET_SERVICE_OPTION,
        )
        .bind(service_option_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_service_option(
        &self,
        service_option: &models::booking::ServiceOption,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_SERVICE_OPTION)
            .bind(&service_option.id)
            .bind(&service_option.name)
            .bind(service_option.price.to_string())
            .bind(service_option.duration_minutes)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_service_option(
        &self,
        service_option: &models::booking::ServiceOption,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_SERVICE_OPTION)
            .bind(&service_option.id)
            .bind(&service_option.name)
            .bind(service_option.price.to_string())
            .bind(service_option.duration_minutes)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_service_option(&self, service_option_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("service_option", service_option_id)
            .await
    }

    async fn list_service_bookings(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::service_booking::ServiceBooking>> {
        self.fetch_page(
            &sqlite_queries::query_list_service_bookings(),
            "service_booking",
            pagination,
        )
        .await
    }

    async fn get_service_booking(
        &self,
        booking_id: &str,
    ) -> anyhow::Result<Option<models::service_booking::ServiceBooking>> {
        Ok(sqlx::query_as::<_, models::service_booking::ServiceBooking>(
            &sqlite_queries::query_get_service_booking(),
        )
        .bind(booking_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn get_service_bookings_by_pet(
        &self,
        pet_id: &str,
    ) -> anyhow::Result<Vec<models::service_booking::ServiceBooking>> {
        Ok(sqlx::query_as::<_, models::service_booking::ServiceBooking>(
            &sqlite_queries::query_get_service_bookings_by_pet(),
        )
        .bind(pet_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn insert_service_booking(
        &self,
        booking: &models::service_booking::ServiceBooking,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_SERVICE_BOOKING)
            .bind(&booking.id)
            .bind(&booking.pet_id)
            .bind(&booking.service_option_id)
            .bind(booking.booking_date)
            .bind(booking.status.to_string())
            .bind(&booking.notes)
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_service_booking(
        &self,
        booking: &models::service_booking::ServiceBooking,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_SERVICE_BOOKING)
            .bind(&booking.id)
            .bind(&booking.service_option_id)
            .bind(booking.booking_date)
            .bind(booking.status.to_string())
            .bind(&booking.notes)
            .bind(booking.updated_at)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn delete_service_booking(&self, booking_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("service_booking", booking_id).await
    }

    async fn list_boarding_reservations(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::boarding_reservation::BoardingReservation>>
    {
        self.fetch_page(
            &sqlite_queries::query_list_boarding_reservations(),
            "boarding_reservation",
            pagination,
        )
        .await
    }

    async fn get_boarding_reservation(
        &self,
        reservation_id: &str,
    ) -> anyhow::Result<Option<models::boarding_reservation::BoardingReservation>> {
        Ok(sqlx::query_as::<_, models::boarding_reservation::BoardingReservation>(
            &sqlite_queries::query_get_boarding_reservation(),
        )
        .bind(reservation_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn get_boarding_reservations_by_pet(
        &self,
        pet_id: &str,
    ) -> anyhow::Result<Vec<models::boarding_reservation::BoardingReservation>> {
        Ok(sqlx::query_as::<_, models::boarding_reservation::BoardingReservation>(
            &sqlite_queries::query_get_boarding_reservations_by_pet(),
        )
        .bind(pet_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn insert_boarding_reservation(
        &self,
        reservation: &models::boarding_reservation::BoardingReservation,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_BOARDING_RESERVATION)
            .bind(&reservation.id)
            .bind(&reservation.pet_id)
            .bind(&reservation.room_id)
            .bind(reservation.start_date)
            .bind(reservation.end_date)
            .bind(reservation.status.to_string())
            .bind(&reservation.notes)
            .bind(reservation.created_at)
            .bind(reservation.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn update_boarding_reservation(
        &self,
        reservation: &models::boarding_reservation::BoardingReservation,
    ) -> anyhow::Result<bool> {
        Ok(
            sqlx::query(sqlite_queries::QUERY_UPDATE_BOARDING_RESERVATION)
                .bind(&reservation.id)
                .bind(&reservation.room_id)
                .bind(reservation.start_date)
                .bind(reservation.end_date)
                .bind(reservation.status.to_string())
                .bind(&reservation.notes)
                .bind(reservation.updated_at)
                .execute(&self.db_pool)
                .await?
                .rows_affected()
                > 0,
        )
    }

    async fn delete_boarding_reservation(&self, reservation_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("boarding_reservation", reservation_id)
            .await
    }

    async fn list_notifications(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::notification::Notification>> {
        self.fetch_page(
            sqlite_queries::QUERY_LIST_NOTIFICATIONS,
            "notification",
            pagination,
        )
        .await
    }

    async fn get_notification(
        &self,
        notification_id: &str,
    ) -> anyhow::Result<Option<models::notification::Notification>> {
        Ok(sqlx::query_as::<_, models::notification::Notification>(
            sqlite_queries::QUERY_GET_NOTIFICATION,
        )
        .bind(notification_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn get_user_notifications(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Vec<models::notification::UserNotification>> {
        Ok(sqlx::query_as::<_, models::notification::UserNotification>(
            sqlite_queries::QUERY_GET_USER_NOTIFICATIONS,
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn count_unread_notifications(&self, user_id: &str) -> anyhow::Result<i64> {
        Ok(
            sqlx::query_scalar::<_, i64>(sqlite_queries::QUERY_COUNT_UNREAD_NOTIFICATIONS)
                .bind(user_id)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn insert_notification(
        &self,
        notification: &models::notification::Notification,
        user_ids: Vec<String>,
    ) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        sqlx::query(sqlite_queries::QUERY_INSERT_NOTIFICATION)
            .bind(&notification.id)
            .bind(&notification.title)
            .bind(&notification.message)
            .bind(notification.notification_type.to_string())
            .bind(notification.created_at)
            .execute(&mut *transaction)
            .await?;

        for user_id in &user_ids {
            sqlx::query(sqlite_queries::QUERY_INSERT_NOTIFICATION_USER)
                .bind(&notification.id)
                .bind(user_id)
                .execute(&mut *transaction)
                .await?;
        }

        transaction.commit().await?;

        Ok(())
    }

    async fn update_notification(
        &self,
        notification: &models::notification::Notification,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_NOTIFICATION)
            .bind(&notification.id)
            .bind(&notification.title)
            .bind(&notification.message)
            .bind(notification.notification_type.to_string())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn mark_notification_read(
        &self,
        user_id: &str,
        notification_id: &str,
    ) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_MARK_NOTIFICATION_READ)
            .bind(user_id)
            .bind(notification_id)
            .bind(chrono::Utc::now())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn mark_all_notifications_read(&self, user_id: &str) -> anyhow::Result<u64> {
        Ok(
            sqlx::query(sqlite_queries::QUERY_MARK_ALL_NOTIFICATIONS_READ)
                .bind(user_id)
                .bind(chrono::Utc::now())
                .execute(&self.db_pool)
                .await?
                .rows_affected(),
        )
    }

    async fn delete_notification(&self, notification_id: &str) -> anyhow::Result<bool> {
        self.delete_by_id("notification", notification_id).await
    }
}
