//! # Pet Clinic
//!
//! Entry point for the clinic REST API and its command line client.
//! Configures logging, the SQLite pool, SSL and route handling.

#![recursion_limit = "256"]
pub mod action;
pub mod api;
pub mod client;
pub mod config;
pub mod consts;
pub mod logger;
pub mod metric;
pub mod models;
pub mod policy;
pub mod repo;
pub mod server;
pub mod utils;

use anyhow::Context;
use clap::Parser;
use logfire::config::MetricsOptions;
use ntex::web;
use ntex_cors::Cors;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let args = action::AppArgs::parse();

    let app_config = config::init_config()?;

    // Logs go to logfire when a token is configured, to stdout otherwise
    let shutdown_handler = match &app_config.logfire_token {
        Some(token) => Some(
            logfire::configure()
                .install_panic_handler()
                .with_metrics(Some(MetricsOptions::default()))
                .send_to_logfire(logfire::config::SendToLogfire::Yes)
                .with_token(token)
                .finish()?,
        ),
        None => {
            logger::setup_simple_logger()?;
            None
        }
    };

    args.run(app_config).await?;

    if let Some(shutdown_handler) = shutdown_handler {
        shutdown_handler.shutdown()?;
    }

    Ok(())
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor(
    app_config: &config::AppConfig,
) -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

    ssl_acceptor
        .set_private_key_file(&app_config.private_key_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load private key from {}: {}",
                app_config.private_key_path,
                e
            )
        })?;

    ssl_acceptor
        .set_certificate_file(&app_config.certificate_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load certificate from {}: {}",
                app_config.certificate_path,
                e
            )
        })?;

    Ok(ssl_acceptor)
}

/// Configures and starts the web server with appropriate SSL settings
pub async fn configure_and_run_server(
    sqlite_repo: repo::sqlite::SqlxSqliteRepo,
) -> anyhow::Result<()> {
    let app_config = config::app_config().context("server started before config")?;
    let server_addr = (
        app_config.web_server_host.clone(),
        app_config.web_server_port,
    );

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec![
                        "GET", "HEAD", "POST", "OPTIONS", "PUT", "PATCH", "DELETE",
                    ])
                    .allowed_origin(&app_config.cors_allowed_origin)
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(server::AppState {
                repo: Box::new(sqlite_repo.clone()),
            })
            .configure(server::routes::api)
    });

    log::info!(
        "serving on {}://{}:{}{}",
        app_config.web_server_protocol(),
        server_addr.0,
        server_addr.1,
        consts::API_PREFIX
    );

    let bound_server = if app_config.is_prod() {
        let ssl_acceptor = setup_ssl_acceptor(app_config)?;
        server.bind_openssl(server_addr, ssl_acceptor)?
    } else {
        server.bind(server_addr)?
    };

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
