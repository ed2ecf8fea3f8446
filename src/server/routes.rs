//! REST route configuration.
//!
//! Every resource lives under [`consts::API_PREFIX`] and answers with the
//! `{code, msg, data}` envelope. Literal segments (`/my`, `/available`,
//! `/pet/{id}`) are registered before the `/{id}` routes they would
//! otherwise collide with.

use super::{
    boarding_reservation, medication_package, medicine, model, notification, pet, prescription,
    prescription_detail, room, service_booking,
};
use crate::consts;
use ntex::web;

/// Configures every `/api` scope.
pub fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(consts::API_PREFIX)
            .configure(medicines)
            .configure(medication_packages)
            .configure(prescriptions)
            .configure(prescription_details)
            .configure(rooms)
            .configure(service_bookings)
            .configure(boarding_reservations)
            .configure(notifications)
            .configure(pets)
            .configure(model_access),
    );
}

/// # Routes
/// - `GET /medicines` - Paginated list
/// - `GET /medicines/{id}`
/// - `POST /medicines`
/// - `PUT /medicines/{id}`
/// - `DELETE /medicines/{id}`
fn medicines(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/medicines").service((
        medicine::list_medicines,
        medicine::get_medicine,
        medicine::create_medicine,
        medicine::update_medicine,
        medicine::delete_medicine,
    )));
}

/// # Routes
/// - `GET /medication-packages` - Paginated list
/// - `GET /medication-packages/medicine/{medicine_id}` - Packages of a medicine
/// - `GET /medication-packages/{id}`
/// - `POST /medication-packages`
/// - `PUT /medication-packages/{id}`
/// - `DELETE /medication-packages/{id}`
fn medication_packages(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/medication-packages").service((
        medication_package::list_medication_packages,
        medication_package::get_medication_packages_by_medicine,
        medication_package::get_medication_package,
        medication_package::create_medication_package,
        medication_package::update_medication_package,
        medication_package::delete_medication_package,
    )));
}

/// # Routes
/// - `GET /prescriptions` - Paginated list
/// - `GET /prescriptions/medical-record/{record_id}`
/// - `GET /prescriptions/{id}`
/// - `POST /prescriptions`
/// - `PUT /prescriptions/{id}`
/// - `DELETE /prescriptions/{id}`
fn prescriptions(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/prescriptions").service((
        prescription::list_prescriptions,
        prescription::get_prescriptions_by_medical_record,
        prescription::get_prescription,
        prescription::create_prescription,
        prescription::update_prescription,
        prescription::delete_prescription,
    )));
}

/// Details are keyed by `(prescription_id, package_id)`.
///
/// # Routes
/// - `GET /prescription-details/prescription/{prescription_id}`
/// - `GET /prescription-details/{prescription_id}/{package_id}`
/// - `POST /prescription-details`
/// - `PUT /prescription-details/{prescription_id}/{package_id}`
/// - `DELETE /prescription-details/{prescription_id}/{package_id}`
fn prescription_details(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/prescription-details").service((
        prescription_detail::get_prescription_details,
        prescription_detail::get_prescription_detail,
        prescription_detail::create_prescription_detail,
        prescription_detail::update_prescription_detail,
        prescription_detail::delete_prescription_detail,
    )));
}

/// # Routes
/// - `GET /rooms` - Paginated list
/// - `GET /rooms/available?start_date=&end_date=` - Rooms free in the window
/// - `GET /rooms/{id}`
/// - `POST /rooms`
/// - `PUT /rooms/{id}`
/// - `DELETE /rooms/{id}`
fn rooms(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/rooms").service((
        room::list_rooms,
        room::get_available_rooms,
        room::get_room,
        room::create_room,
        room::update_room,
        room::delete_room,
    )));
}

/// # Routes
/// - `GET /service-bookings` - Paginated list
/// - `GET /service-bookings/pet/{pet_id}`
/// - `GET /service-bookings/{id}`
/// - `POST /service-bookings`
/// - `PUT /service-bookings/{id}`
/// - `PATCH /service-bookings/{id}/cancel`
/// - `DELETE /service-bookings/{id}`
fn service_bookings(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/service-bookings").service((
        service_booking::list_service_bookings,
        service_booking::get_service_bookings_by_pet,
        service_booking::get_service_booking,
        service_booking::create_service_booking,
        service_booking::update_service_booking,
        service_booking::cancel_service_booking,
        service_booking::delete_service_booking,
    )));
}

/// # Routes
/// - `GET /boarding-reservations` - Paginated list
/// - `GET /boarding-reservations/pet/{pet_id}`
/// - `GET /boarding-reservations/{id}`
/// - `POST /boarding-reservations`
/// - `PUT /boarding-reservations/{id}`
/// - `DELETE /boarding-reservations/{id}`
fn boarding_reservations(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/boarding-reservations").service((
        boarding_reservation::list_boarding_reservations,
        boarding_reservation::get_boarding_reservations_by_pet,
        boarding_reservation::get_boarding_reservation,
        boarding_reservation::create_boarding_reservation,
        boarding_reservation::update_boarding_reservation,
        boarding_reservation::delete_boarding_reservation,
    )));
}

/// Listing, reading and writing notifications is staff only; the `/my`
/// family works on the caller's own notifications.
///
/// # Routes
/// - `GET /notifications` - Paginated list
/// - `GET /notifications/my`
/// - `GET /notifications/unread-count`
/// - `PATCH /notifications/mark-read/{id}`
/// - `PATCH /notifications/mark-all-read`
/// - `GET /notifications/{id}`
/// - `POST /notifications`
/// - `PUT /notifications/{id}`
/// - `DELETE /notifications/{id}`
fn notifications(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/notifications").service((
        notification::list_notifications,
        notification::get_my_notifications,
        notification::get_unread_count,
        notification::mark_as_read,
        notification::mark_all_as_read,
        notification::get_notification,
        notification::create_notification,
        notification::update_notification,
        notification::delete_notification,
    )));
}

/// # Routes
/// - `GET /pets/my`
/// - `GET /pets/{id}`
fn pets(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/pets").service((pet::get_my_pets, pet::get_pet)));
}

/// # Routes
/// - `* /model/{model}/{operation}`
/// - `* /model/{model}/{operation}/{id}`
fn model_access(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/model")
            .service(web::resource("/{model}/{operation}").to(model::handle_model_request))
            .service(web::resource("/{model}/{operation}/{id}").to(model::handle_model_request)),
    );
}
