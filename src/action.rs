use clap::{Args, Parser, Subcommand};

use crate::{
    api,
    client::{self, storage::TokenStorage},
    config, repo, utils,
};

/// Applies the schema and stores the configured caller so it can own rows
async fn prepare_database(
    app_config: &config::AppConfig,
) -> anyhow::Result<repo::sqlite::SqlxSqliteRepo> {
    let db_pool = utils::setup_sqlite_db_pool(app_config.is_prod()).await?;
    utils::run_migrations(&db_pool).await?;

    let sqlite_repo = repo::sqlite::SqlxSqliteRepo { db_pool };
    let repo: repo::ImplAppRepo = Box::new(sqlite_repo.clone());
    api::user::get_or_create_app_user(&app_config.mock_user()?, &repo).await?;

    Ok(sqlite_repo)
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// Bearer token to send with every request
    #[arg(short, long)]
    token: String,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Runs the REST API
    Serve,
    /// Applies the database schema and exits
    Migrate,
    /// Stores the bearer token used by the API client
    Login(LoginArgs),
    /// Prints the caller's bookings and reservations across all their pets
    MyBookings,
}

/// Pet clinic server and API client
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self, app_config: &config::AppConfig) -> anyhow::Result<()> {
        match &self.action {
            Action::Serve => {
                let sqlite_repo = prepare_database(app_config).await?;
                crate::configure_and_run_server(sqlite_repo).await
            }
            Action::Migrate => {
                prepare_database(app_config).await?;
                log::info!("migrations applied to {}", app_config.db_host);
                Ok(())
            }
            Action::Login(LoginArgs { token }) => {
                client::storage::FileTokenStorage::new(&app_config.token_path).set_token(token)
            }
            Action::MyBookings => {
                let http = client::http::HttpClient::from_config(app_config);
                let summary = client::booking_summary::get_user_bookings(&http).await?;

                if summary.has_failures() {
                    log::warn!("some pets could not be loaded, see petOutcomes");
                }
                println!("{}", serde_json::to_string_pretty(&summary)?);
                Ok(())
            }
        }
    }
}
