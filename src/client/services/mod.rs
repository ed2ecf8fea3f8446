//! One module per backend resource. Every function issues a single HTTP call
//! and returns the unwrapped `data`, or a [`ServiceError`] carrying the
//! server message (4xx) or the function's own fallback message.

pub mod boarding_reservation;
pub mod medication_package;
pub mod medicine;
pub mod notification;
pub mod pet;
pub mod prescription;
pub mod prescription_detail;
pub mod room;
pub mod service_booking;

use super::{error::ClientError, error::ServiceError, http::Query};
use crate::models::pagination::Pagination;

/// `?page=&limit=` normalized the same way the server does
pub(crate) fn page_query(page: Option<u32>, limit: Option<u32>) -> Query {
    let pagination = Pagination::new(page, limit);
    vec![
        ("page", pagination.page.to_string()),
        ("limit", pagination.limit.to_string()),
    ]
}

pub(crate) fn fail(fallback: &'static str) -> impl FnOnce(ClientError) -> ServiceError {
    move |err| ServiceError::from_client(err, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_is_clamped() {
        assert_eq!(
            page_query(Some(0), Some(500)),
            vec![("page", "1".to_string()), ("limit", "100".to_string())]
        );
        assert_eq!(
            page_query(None, None),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }
}
