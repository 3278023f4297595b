//! Serves the contact-submission data API over HTTP.
//!
//! Reads configuration from the environment (`POSTBOX_DATABASE_URL`,
//! `POSTBOX_BIND_ADDR`, `POSTBOX_POOL_SIZE`), builds a Diesel connection
//! pool against `PostgreSQL`, and exposes the store at `/api/contacts`.

use std::sync::Arc;

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use postbox::api;
use postbox::config::ApiConfig;
use postbox::contact::adapters::postgres::PostgresContactRepository;
use postbox::contact::services::intake::ContactIntakeService;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(config.database_url.clone());
    let pool = Pool::builder().max_size(config.pool_size).build(manager)?;

    let repository = Arc::new(PostgresContactRepository::new(pool));
    let service = ContactIntakeService::new(repository, Arc::new(DefaultClock));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "contact API listening");
    axum::serve(listener, api::router(service)).await?;

    Ok(())
}
