//! Application configuration loaded from environment variables.
//!
//! The same configuration drives the server (`serve`, `migrate`) and the API
//! client (`my-bookings`). Values are read once by [`init_config`] and then
//! shared through [`APP_CONFIG`].
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - `MOCK_USER_*` stands in for real authentication; it is not a boundary

use anyhow::Context;
use envconfig::Envconfig;
use std::sync::OnceLock;

use crate::models::user_app::{AccountRole, AuthUser};

#[derive(Envconfig, Clone, Debug)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(from = "ENV", default = "local")]
    pub env: String,

    /// Database host value (NON-SENSITIVE)
    /// Example: "sqlite:data/app.db"
    #[envconfig(from = "DB_HOST", default = "sqlite:pet_clinic.db?mode=rwc")]
    pub db_host: String,

    /// 🔒 SENSITIVE: Database password to encrypt SQLite data, used in prod only
    #[envconfig(from = "DB_PASS_ENCRYPT")]
    pub db_pass_encrypt: Option<String>,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(from = "WEB_SERVER_HOST", default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(from = "WEB_SERVER_PORT", default = "8080")]
    pub web_server_port: u16,

    /// Path to SSL private key file (SENSITIVE PATH)
    #[envconfig(from = "PRIVATE_KEY_PATH", default = "server.key")]
    pub private_key_path: String,

    /// Path to SSL certificate file (NON-SENSITIVE)
    #[envconfig(from = "CERTIFICATE_PATH", default = "server.crt")]
    pub certificate_path: String,

    /// Origin allowed by CORS, typically the admin UI
    #[envconfig(from = "CORS_ALLOWED_ORIGIN", default = "http://localhost:5173")]
    pub cors_allowed_origin: String,

    /// Identity injected for every request while authentication is stubbed
    #[envconfig(from = "MOCK_USER_ID", default = "mock-user")]
    pub mock_user_id: String,

    #[envconfig(from = "MOCK_USER_EMAIL", default = "mock.user@petclinic.local")]
    pub mock_user_email: String,

    /// Values: "CUSTOMER", "STAFF", "ADMIN"
    #[envconfig(from = "MOCK_USER_ROLE", default = "CUSTOMER")]
    pub mock_user_role: String,

    /// Base url the API client talks to
    #[envconfig(from = "API_BASE_URL", default = "http://localhost:8080/api")]
    pub api_base_url: String,

    /// File the API client keeps its bearer token in
    #[envconfig(from = "TOKEN_PATH", default = ".pet-clinic-token")]
    pub token_path: String,

    /// 🔒 SENSITIVE: Logfire write token, logs stay local when unset
    #[envconfig(from = "LOGFIRE_TOKEN")]
    pub logfire_token: Option<String>,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Builds the stubbed authenticated user
    pub fn mock_user(&self) -> anyhow::Result<AuthUser> {
        Ok(AuthUser {
            id: self.mock_user_id.clone(),
            email: self.mock_user_email.clone(),
            role: self
                .mock_user_role
                .parse::<AccountRole>()
                .context("invalid MOCK_USER_ROLE")?,
        })
    }

    /// Gets the appropriate protocol (HTTP/HTTPS) based on environment
    pub fn web_server_protocol(&self) -> &'static str {
        if self.is_prod() {
            return "https";
        }
        "http"
    }
}

/// Global application configuration, set once by [`init_config`]
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads the configuration from the environment into [`APP_CONFIG`]
pub fn init_config() -> anyhow::Result<&'static AppConfig> {
    if let Some(app_config) = APP_CONFIG.get() {
        return Ok(app_config);
    }

    let app_config = AppConfig::init_from_env()
        .context("failed to load application configuration from environment")?;

    Ok(APP_CONFIG.get_or_init(|| app_config))
}

/// Returns the loaded configuration
pub fn app_config() -> anyhow::Result<&'static AppConfig> {
    APP_CONFIG.get().context("failed to get app config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::init_from_hashmap(&env).unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let app_config = config_from(&[]);
        assert_eq!(app_config.web_server_port, 8080);
        assert_eq!(app_config.api_base_url, "http://localhost:8080/api");
        assert!(!app_config.is_prod());
        assert!(app_config.logfire_token.is_none());
    }

    #[test]
    fn test_mock_user_from_env() {
        let app_config = config_from(&[("MOCK_USER_ID", "u-1"), ("MOCK_USER_ROLE", "staff")]);
        let user = app_config.mock_user().unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.role, AccountRole::Staff);
    }

    #[test]
    fn test_mock_user_invalid_role() {
        let app_config = config_from(&[("MOCK_USER_ROLE", "owner")]);
        assert!(app_config.mock_user().is_err());
    }

    #[test]
    fn test_is_prod_case_insensitive() {
        let app_config = config_from(&[("ENV", "PROD")]);
        assert!(app_config.is_prod());
        assert_eq!(app_config.web_server_protocol(), "https");
    }
}
