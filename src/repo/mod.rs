pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;
use derive_more::{Display, Error};

/// Marker error for rows that do not exist; handlers map it to 404
#[derive(Debug, Display, Error, PartialEq)]
pub enum RepoError {
    #[display("{_0} not found")]
    NotFound(#[error(not(source))] String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepo: Send + Sync {
    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<models::user_app::User>>;

    async fn insert_user(&self, user: &models::user_app::User) -> anyhow::Result<()>;

    // pets

    async fn get_pets_by_owner(&self, owner_id: &str) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn list_pets(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::pet::Pet>>;

    async fn get_pet(&self, pet_id: &str) -> anyhow::Result<Option<models::pet::Pet>>;

    async fn insert_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()>;

    async fn update_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<bool>;

    async fn delete_pet(&self, pet_id: &str) -> anyhow::Result<bool>;

    // medicines

    async fn list_medicines(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::medicine::Medicine>>;

    async fn get_medicine(
        &self,
        medicine_id: &str,
    ) -> anyhow::Result<Option<models::medicine::Medicine>>;

    async fn insert_medicine(&self, medicine: &models::medicine::Medicine) -> anyhow::Result<()>;

    async fn update_medicine(&self, medicine: &models::medicine::Medicine)
    -> anyhow::Result<bool>;

    async fn delete_medicine(&self, medicine_id: &str) -> anyhow::Result<bool>;

    // medication packages

    async fn list_medication_packages(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::medication_package::MedicationPackage>>;

    async fn get_medication_package(
        &self,
        package_id: &str,
    ) -> anyhow::Result<Option<models::medication_package::MedicationPackage>>;

    async fn get_medication_packages_by_medicine(
        &self,
        medicine_id: &str,
    ) -> anyhow::Result<Vec<models::medication_package::MedicationPackage>>;

    async fn insert_medication_package(
        &self,
        package: &models::medication_package::MedicationPackage,
    ) -> anyhow::Result<()>;

    async fn update_medication_package(
        &self,
        package: &models::medication_package::MedicationPackage,
    ) -> anyhow::Result<bool>;

    async fn delete_medication_package(&self, package_id: &str) -> anyhow::Result<bool>;

    // prescriptions

    async fn get_medical_record(
        &self,
        medical_record_id: &str,
    ) -> anyhow::Result<Option<models::prescription::MedicalRecord>>;

    async fn list_prescriptions(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::prescription::Prescription>>;

    async fn get_prescription(
        &self,
        prescription_id: &str,
    ) -> anyhow::Result<Option<models::prescription::Prescription>>;

    async fn get_prescriptions_by_medical_record(
        &self,
        medical_record_id: &str,
    ) -> anyhow::Result<Vec<models::prescription::Prescription>>;

    async fn insert_prescription(
        &self,
        prescription: &models::prescription::Prescription,
    ) -> anyhow::Result<()>;

    async fn update_prescription(
        &self,
        prescription: &models::prescription::Prescription,
    ) -> anyhow::Result<bool>;

    async fn delete_prescription(&self, prescription_id: &str) -> anyhow::Result<bool>;

    // prescription details

    async fn get_prescription_details(
        &self,
        prescription_id: &str,
    ) -> anyhow::Result<Vec<models::prescription::PrescriptionDetail>>;

    async fn get_prescription_detail(
        &self,
        prescription_id: &str,
        package_id: &str,
    ) -> anyhow::Result<Option<models::prescription::PrescriptionDetail>>;

    async fn insert_prescription_detail(
        &self,
        detail: &models::prescription::PrescriptionDetail,
    ) -> anyhow::Result<()>;

    async fn update_prescription_detail(
        &self,
        detail: &models::prescription::PrescriptionDetail,
    ) -> anyhow::Result<bool>;

    async fn delete_prescription_detail(
        &self,
        prescription_id: &str,
        package_id: &str,
    ) -> anyhow::Result<bool>;

    // rooms

    async fn list_rooms(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::room::Room>>;

    async fn get_room(&self, room_id: &str) -> anyhow::Result<Option<models::room::Room>>;

    async fn get_available_rooms(
        &self,
        window: &models::room::AvailabilityWindow,
    ) -> anyhow::Result<Vec<models::room::Room>>;

    async fn insert_room(&self, room: &models::room::Room) -> anyhow::Result<()>;

    async fn update_room(&self, room: &models::room::Room) -> anyhow::Result<bool>;

    async fn delete_room(&self, room_id: &str) -> anyhow::Result<bool>;

    // service options

    async fn list_service_options(&self) -> anyhow::Result<Vec<models::booking::ServiceOption>>;

    async fn get_service_option(
        &self,
        service_option_id: &str,
    ) -> anyhow::Result<Option<models::booking::ServiceOption>>;

    async fn insert_service_option(
        &self,
        service_option: &models::booking::ServiceOption,
    ) -> anyhow::Result<()>;

    async fn update_service_option(
        &self,
        service_option: &models::booking::ServiceOption,
    ) -> anyhow::Result<bool>;

    async fn delete_service_option(&self, service_option_id: &str) -> anyhow::Result<bool>;

    // service bookings

    async fn list_service_bookings(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::service_booking::ServiceBooking>>;

    async fn get_service_booking(
        &self,
        booking_id: &str,
    ) -> anyhow::Result<Option<models::service_booking::ServiceBooking>>;

    async fn get_service_bookings_by_pet(
        &self,
        pet_id: &str,
    ) -> anyhow::Result<Vec<models::service_booking::ServiceBooking>>;

    async fn insert_service_booking(
        &self,
        booking: &models::service_booking::ServiceBooking,
    ) -> anyhow::Result<()>;

    async fn update_service_booking(
        &self,
        booking: &models::service_booking::ServiceBooking,
    ) -> anyhow::Result<bool>;

    async fn delete_service_booking(&self, booking_id: &str) -> anyhow::Result<bool>;

    // boarding reservations

    async fn list_boarding_reservations(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::boarding_reservation::BoardingReservation>>;

    async fn get_boarding_reservation(
        &self,
        reservation_id: &str,
    ) -> anyhow::Result<Option<models::boarding_reservation::BoardingReservation>>;

    async fn get_boarding_reservations_by_pet(
        &self,
        pet_id: &str,
    ) -> anyhow::Result<Vec<models::boarding_reservation::BoardingReservation>>;

    async fn insert_boarding_reservation(
        &self,
        reservation: &models::boarding_reservation::BoardingReservation,
    ) -> anyhow::Result<()>;

    async fn update_boarding_reservation(
        &self,
        reservation: &models::boarding_reservation::BoardingReservation,
    ) -> anyhow::Result<bool>;

    async fn delete_boarding_reservation(&self, reservation_id: &str) -> anyhow::Result<bool>;

    // notifications

    async fn list_notifications(
        &self,
        pagination: &models::pagination::Pagination,
    ) -> anyhow::Result<models::envelope::Page<models::notification::Notification>>;

    async fn get_notification(
        &self,
        notification_id: &str,
    ) -> anyhow::Result<Option<models::notification::Notification>>;

    async fn get_user_notifications(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Vec<models::notification::UserNotification>>;

    async fn count_unread_notifications(&self, user_id: &str) -> anyhow::Result<i64>;

    async fn insert_notification(
        &self,
        notification: &models::notification::Notification,
        user_ids: Vec<String>,
    ) -> anyhow::Result<()>;

    async fn update_notification(
        &self,
        notification: &models::notification::Notification,
    ) -> anyhow::Result<bool>;

    async fn mark_notification_read(
        &self,
        user_id: &str,
        notification_id: &str,
    ) -> anyhow::Result<bool>;

    async fn mark_all_notifications_read(&self, user_id: &str) -> anyhow::Result<u64>;

    async fn delete_notification(&self, notification_id: &str) -> anyhow::Result<bool>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
