use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Display, Default, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountRole {
    #[default]
    #[display("CUSTOMER")]
    Customer,
    #[display("STAFF")]
    Staff,
    #[display("ADMIN")]
    Admin,
}

impl AccountRole {
    /// Staff and admins share every staff permission
    pub fn is_staff(&self) -> bool {
        matches!(self, AccountRole::Staff | AccountRole::Admin)
    }
}

impl FromStr for AccountRole {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "CUSTOMER" => Ok(AccountRole::Customer),
            "STAFF" => Ok(AccountRole::Staff),
            "ADMIN" => Ok(AccountRole::Admin),
            other => anyhow::bail!("unknown account role: {other}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub account_role: AccountRole,
    pub created_at: DateTime<Utc>,
}

/// The caller on whose behalf a request runs.
///
/// Authentication is stubbed: the server always injects the user configured
/// through `MOCK_USER_*`, whatever bearer token the request carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: AccountRole,
}

impl AuthUser {
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    pub fn owns(&self, owner_id: &str) -> bool {
        self.id == owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_role_from_str() {
        assert_eq!("staff".parse::<AccountRole>().unwrap(), AccountRole::Staff);
        assert_eq!(" ADMIN ".parse::<AccountRole>().unwrap(), AccountRole::Admin);
        assert!("vet".parse::<AccountRole>().is_err());
    }

    #[test]
    fn test_admin_counts_as_staff() {
        assert!(AccountRole::Admin.is_staff());
        assert!(AccountRole::Staff.is_staff());
        assert!(!AccountRole::Customer.is_staff());
    }
}
