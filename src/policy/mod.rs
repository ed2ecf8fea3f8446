//! Access control for the generic `/api/model/*` route.
//!
//! [`schema`] holds the declarative rule table, [`enhanced`] applies it to a
//! request on behalf of the authenticated user.

pub mod enhanced;
pub mod error;
pub mod schema;

pub use enhanced::{EnhancedClient, FindManyArgs, ModelRequest, ModelResponse};
pub use error::PolicyError;
