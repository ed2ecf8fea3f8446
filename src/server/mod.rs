pub mod boarding_reservation;
pub mod errors;
pub mod medication_package;
pub mod medicine;
pub mod middleware;
pub mod model;
pub mod notification;
pub mod pet;
pub mod prescription;
pub mod prescription_detail;
pub mod room;
pub mod routes;
pub mod service_booking;

use ntex::web;
use serde::Serialize;

use crate::{models, repo};

pub struct AppState {
    pub repo: repo::ImplAppRepo,
}

pub(crate) fn ok_json<T: Serialize>(data: T) -> web::HttpResponse {
    web::HttpResponse::Ok().json(&models::envelope::Envelope::ok(data))
}

pub(crate) fn created_json<T: Serialize>(data: T) -> web::HttpResponse {
    web::HttpResponse::Created().json(&models::envelope::Envelope::created(data))
}

pub(crate) fn paginated_json<T: Serialize>(page: models::envelope::Page<T>) -> web::HttpResponse {
    web::HttpResponse::Ok().json(&models::envelope::PaginatedEnvelope::ok(
        page.items, page.meta,
    ))
}
