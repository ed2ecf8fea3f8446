//! Typed client for the clinic API, the service layer the UI consumes.

pub mod booking_summary;
pub mod error;
pub mod http;
pub mod navigator;
pub mod services;
pub mod storage;
