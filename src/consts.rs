pub const API_PREFIX: &str = "/api";
pub const LOGIN_ROUTE: &str = "/login";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Upper bound used by `findMany` on the model route when `take` is omitted
pub const MODEL_FIND_MANY_MAX: u32 = 100;

pub const MIGRATION_INIT: &str = include_str!("../migrations/001_init.sql");
