//! # API Module
//!
//! Business logic for the clinic resources. Handlers in [`crate::server`] and
//! the policy client in [`crate::policy`] call into these functions; each
//! submodule works over the [`crate::repo::AppRepo`] trait only.
//!
//! ## Modules
//!
//! - [`boarding_reservation`] - Room stays booked for a pet
//! - [`medicine`] - Medicine catalog
//! - [`medication_package`] - Sellable packages of a medicine
//! - [`notification`] - Notifications and per-user read state
//! - [`pet`] - Pets and their owners
//! - [`prescription`] - Prescriptions attached to medical records
//! - [`prescription_detail`] - Packages prescribed in a prescription
//! - [`room`] - Boarding rooms and availability
//! - [`service_booking`] - Appointments for a clinic service
//! - [`service_option`] - Services the clinic offers
//! - [`user`] - Stored users behind the injected caller

pub mod boarding_reservation;
pub mod medication_package;
pub mod medicine;
pub mod notification;
pub mod pet;
pub mod prescription;
pub mod prescription_detail;
pub mod room;
pub mod service_booking;
pub mod service_option;
pub mod user;

use derive_more::{Display, Error};

/// Marker error for rejected input; handlers map it to 400
#[derive(Debug, Display, Error, PartialEq)]
pub enum InputError {
    #[display("invalid input: {_0}")]
    Invalid(#[error(not(source))] String),
}

pub(crate) fn invalid(reason: &str) -> anyhow::Error {
    InputError::Invalid(reason.to_string()).into()
}

pub(crate) fn not_found(resource: &str) -> anyhow::Error {
    crate::repo::RepoError::NotFound(resource.to_string()).into()
}
