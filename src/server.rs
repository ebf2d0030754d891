//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, dependency wiring, and the Axum
//! server lifecycle.

use crate::application::services::{
    DistrictService, ElectionService, PartyService, ProvinceService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgDistrictRepository, PgElectionRepository, PgPartyRepository, PgProvinceRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Repositories, services, and shared state (explicit construction:
///   repositories first, then services, then the router)
/// - Axum HTTP server with ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let province_repository = Arc::new(PgProvinceRepository::new(pool.clone()));
    let district_repository = Arc::new(PgDistrictRepository::new(pool.clone()));
    let election_repository = Arc::new(PgElectionRepository::new(pool.clone()));
    let party_repository = Arc::new(PgPartyRepository::new(pool.clone()));

    let state = AppState {
        province_service: Arc::new(ProvinceService::new(province_repository.clone())),
        district_service: Arc::new(DistrictService::new(
            district_repository,
            province_repository,
        )),
        election_service: Arc::new(ElectionService::new(election_repository.clone())),
        party_service: Arc::new(PartyService::new(party_repository, election_repository)),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when ctrl-c is received, letting in-flight requests finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
    }
    tracing::info!("Shutdown signal received");
}
