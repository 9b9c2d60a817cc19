//! Backend entry-point: loads settings, seeds accounts and serves the API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobboard::inbound::http::health::HealthState;
use jobboard::server::{ServerSettings, build_http_state, create_server};

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

    let settings =
        ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let config = settings.server_config()?;
    info!(
        addr = %config.local_addr()?,
        seed_users = settings.seed_users,
        "starting job board backend"
    );

    let health_state = web::Data::new(HealthState::new());
    let http_state = build_http_state(&config).await?;
    let server = create_server(health_state, http_state, config)?;
    server.await
}
