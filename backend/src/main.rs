//! Backend entry-point: loads configuration, prepares persistence and serves
//! the REST API.

mod server;

use std::time::Duration;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use housing::inbound::http::health::HealthState;
use housing::inbound::http::session_config::{BuildMode, session_settings_from_env};
use housing::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use housing::settings::ServerSettings;
use server::{ServerConfig, create_server};

const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Open the pool after applying pending migrations.
async fn connect_database(settings: &ServerSettings) -> std::io::Result<Option<DbPool>> {
    let Some(url) = settings.database_url() else {
        warn!("HOUSING_DATABASE_URL not set; serving fixture data");
        return Ok(None);
    };

    run_pending_migrations(url.to_owned())
        .await
        .map_err(std::io::Error::other)?;

    let config = PoolConfig::new(url)
        .with_max_size(settings.pool_max_size())
        .with_connection_timeout(POOL_CONNECTION_TIMEOUT);
    let pool = DbPool::new(config).await.map_err(std::io::Error::other)?;
    info!(max_size = settings.pool_max_size(), "database pool ready");
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mode = BuildMode::from_debug_assertions();
    let session = session_settings_from_env(&DefaultEnv::new(), mode)
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %session.key_fingerprint(),
        cookie_secure = session.cookie_secure,
        "session key loaded"
    );

    let mut config = ServerConfig::new(session, mode, bind_addr);
    if let Some(pool) = connect_database(&settings).await? {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
