//! # User API Module
//!
//! Pets and notification recipients reference a stored user, so the caller
//! the server injects must exist as a row before it can own anything.

use crate::{metric, models, repo};
use chrono::Utc;

/// Gets the stored row for `auth_user`, inserting it when missing.
///
/// The full name defaults to the local part of the email.
///
/// # Errors
/// Returns an error if the lookup or the insert fails.
pub async fn get_or_create_app_user(
    auth_user: &models::user_app::AuthUser,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::user_app::User> {
    if let Some(user) = repo.get_user(&auth_user.id).await? {
        return Ok(user);
    }

    let user = models::user_app::User {
        id: auth_user.id.clone(),
        email: auth_user.email.clone(),
        full_name: auth_user
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string(),
        account_role: auth_user.role.clone(),
        created_at: Utc::now(),
    };
    repo.insert_user(&user).await?;

    metric::incr_user_action_statds("create_user");
    log::info!("created user {} ({})", user.id, user.account_role);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::user_app::{AccountRole, AuthUser},
        policy::{EnhancedClient, FindManyArgs, ModelRequest},
        repo::{MockAppRepo, sqlite::SqlxSqliteRepo},
        utils,
    };
    use ntex::http::Method;
    use sqlx::sqlite::SqlitePoolOptions;

    fn mock_user() -> AuthUser {
        AuthUser {
            id: "mock-user".into(),
            email: "mock.user@petclinic.local".into(),
            role: AccountRole::Customer,
        }
    }

    #[ntex::test]
    async fn test_existing_user_is_not_inserted_again() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_user().times(1).returning(|id| {
            Ok(Some(models::user_app::User {
                id: id.into(),
                email: "mock.user@petclinic.local".into(),
                full_name: "Mock".into(),
                account_role: AccountRole::Customer,
                created_at: Utc::now(),
            }))
        });
        mock_repo.expect_insert_user().never();
        let repo: repo::ImplAppRepo = Box::new(mock_repo);

        let user = get_or_create_app_user(&mock_user(), &repo).await.unwrap();
        assert_eq!(user.full_name, "Mock");
    }

    #[ntex::test]
    async fn test_seeded_user_can_create_pet_on_fresh_db() {
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&db_pool)
            .await
            .unwrap();
        utils::run_migrations(&db_pool).await.unwrap();
        let repo: repo::ImplAppRepo = Box::new(SqlxSqliteRepo { db_pool });

        let created = get_or_create_app_user(&mock_user(), &repo).await.unwrap();
        assert_eq!(created.full_name, "mock.user");
        assert_eq!(created.account_role, AccountRole::Customer);

        // second start finds the row
        let again = get_or_create_app_user(&mock_user(), &repo).await.unwrap();
        assert_eq!(again.id, "mock-user");

        let response = EnhancedClient::new(&repo, mock_user())
            .handle(ModelRequest {
                method: Method::POST,
                model: "pet".into(),
                operation: "create".into(),
                id: None,
                args: FindManyArgs::default(),
                body: Some(serde_json::json!({ "name": "Milo", "species": "cat" })),
            })
            .await
            .unwrap();

        assert_eq!(response.data["ownerId"], "mock-user");
        assert_eq!(response.data["name"], "Milo");
        assert_eq!(repo.get_pets_by_owner("mock-user").await.unwrap().len(), 1);
    }
}
