//! User admin entry-point: loads settings, seeds the store, and serves the
//! user pages.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server, drain_on, shutdown_signal};
use user_admin::inbound::http::health::HealthState;
use user_admin::inbound::http::state::HttpState;
use user_admin::outbound::memory::{InMemoryUserService, example_users};
use user_admin::settings::AppSettings;

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

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid bind address: {e}"),
        )
    })?;

    let store = if settings.seed_users {
        let users = example_users();
        info!(count = users.len(), "seeding example users");
        InMemoryUserService::with_users(users)
    } else {
        InMemoryUserService::new()
    };

    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(HttpState::new(Arc::new(store)));
    let server = create_server(health_state.clone(), http_state, ServerConfig::new(bind_addr))?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}
