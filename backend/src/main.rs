//! Backend entry-point: loads settings, wires the store, and serves GraphQL.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hotel_api::inbound::graphql::build_schema;
use hotel_api::inbound::http::health::HealthState;
use hotel_api::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use hotel_api::outbound::security::{BcryptPasswordHasher, JwtTokenIssuer};
use hotel_api::seeding::seed_hotels_on_startup;
use hotel_api::settings::AppSettings;
use server::{BuiltState, ServerConfig, build_state, create_server, drain_on, shutdown_signal};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {err}"))
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

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| startup_error("failed to load settings", err))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| startup_error("invalid settings", err))?;
    let secret = settings
        .jwt_secret()
        .map_err(|err| startup_error("invalid settings", err))?;

    let hasher = Arc::new(BcryptPasswordHasher::new(settings.bcrypt_cost()));
    let tokens = Arc::new(
        JwtTokenIssuer::new(secret, Arc::new(DefaultClock))
            .map_err(|err| startup_error("invalid token issuer", err))?,
    );
    let mut config = ServerConfig::new(bind_addr, hasher, tokens);

    match settings.database_url() {
        Some(url) => {
            run_migrations(url)
                .await
                .map_err(|err| startup_error("database migration failed", err))?;
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|err| startup_error("database pool failed", err))?;
            config = config.with_db_pool(pool);
            info!(store = "postgres", "persistence configured");
        }
        None => {
            warn!(store = "memory", "HOTEL_API_DATABASE_URL not set; data will not survive restarts");
        }
    }

    let BuiltState { graphql, hotels } = build_state(&config);
    seed_hotels_on_startup(settings.hotel_seed_path.as_deref(), hotels.as_ref())
        .await
        .map_err(|err| startup_error("hotel seeding failed", err))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), build_schema(graphql), &config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    info!(%bind_addr, "listening");
    server.await
}
