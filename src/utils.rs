//! Helper functions shared by the server, the CLI and the API client

use crate::{config, consts};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use std::{str::FromStr, sync::LazyLock};

pub async fn setup_sqlite_db_pool(encrypted: bool) -> anyhow::Result<SqlitePool> {
    let app_config = config::app_config()?;

    let connect_options =
        SqliteConnectOptions::from_str(&app_config.db_host)?.pragma("foreign_keys", "ON");

    match (encrypted, &app_config.db_pass_encrypt) {
        (true, Some(db_pass)) => Ok(SqlitePool::connect_with(
            connect_options
                .pragma("key", db_pass.clone())
                .pragma("cipher_page_size", "1024")
                .pragma("kdf_iter", "64000")
                .pragma("cipher_hmac_algorithm", "HMAC_SHA1")
                .pragma("cipher_kdf_algorithm", "PBKDF2_HMAC_SHA1")
                .journal_mode(SqliteJournalMode::Delete),
        )
        .await?),
        (true, None) => {
            log::warn!("DB_PASS_ENCRYPT is not set, opening the database unencrypted");
            Ok(SqlitePool::connect_with(connect_options).await?)
        }
        (false, _) => Ok(SqlitePool::connect_with(connect_options).await?),
    }
}

/// Applies the schema. Every statement is idempotent so it is safe on every start.
pub async fn run_migrations(db_pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::raw_sql(consts::MIGRATION_INIT).execute(db_pool).await?;
    Ok(())
}

/// Client to make http requests
pub static REQUEST_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Strips markup from user supplied free text, keeping `None` as `None`
pub fn clean_text(value: Option<String>) -> Option<String> {
    value.map(|v| ammonia::clean(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_scripts() {
        assert_eq!(
            clean_text(Some("<script>alert(1)</script>Take with food".into())),
            Some("Take with food".to_string())
        );
        assert_eq!(clean_text(None), None);
    }
}
