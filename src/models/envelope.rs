//! The `{code, msg, data}` wrapper every API response uses.
//!
//! Both the server and the client speak exactly this shape; the paginated
//! variant adds `meta`.

use serde::{Deserialize, Serialize};

use super::pagination::Pagination;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub code: u16,
    pub msg: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(code: u16, msg: impl Into<String>, data: T) -> Self {
        Self {
            code,
            msg: msg.into(),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(200, "success", data)
    }

    pub fn created(data: T) -> Self {
        Self::new(201, "created", data)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, pagination: &Pagination) -> Self {
        let limit = i64::from(pagination.limit.max(1));
        Self {
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: (total.max(0) + limit - 1) / limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedEnvelope<T> {
    pub code: u16,
    pub msg: String,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PaginatedEnvelope<T> {
    pub fn ok(data: Vec<T>, meta: PageMeta) -> Self {
        Self {
            code: 200,
            msg: "success".into(),
            data,
            meta,
        }
    }
}

/// A page of rows plus the total row count, before it is wrapped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Error body: same envelope, `data` always null
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub msg: String,
    pub data: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    pub fn new(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_total_pages_rounds_up() {
        let pagination = Pagination::new(Some(2), Some(10));
        let meta = PageMeta::new(21, &pagination);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.page, 2);

        let empty = PageMeta::new(0, &pagination);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_paginated_envelope_serializes_camel_case_meta() {
        let pagination = Pagination::new(None, None);
        let envelope = PaginatedEnvelope::ok(vec![1, 2], PageMeta::new(2, &pagination));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["meta"]["totalPages"], 1);
        assert_eq!(value["code"], 200);
        assert_eq!(value["data"].as_array().map(|d| d.len()), Some(2));
    }
}
