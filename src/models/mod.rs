//! Plain records mirrored from the database schema and exposed as DTOs.
//!
//! Every entity is serialized in camelCase and every enum in
//! SCREAMING_SNAKE_CASE, matching the JSON the clinic UI consumes.

pub mod booking;
pub mod boarding_reservation;
pub mod envelope;
pub mod medication_package;
pub mod medicine;
pub mod notification;
pub mod pagination;
pub mod pet;
pub mod prescription;
pub mod room;
pub mod service_booking;
pub mod user_app;
