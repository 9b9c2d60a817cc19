//! Builders wiring repositories and domain services into HTTP state.

use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use crate::domain::{CredentialStore, JobBoard, PasswordHasher};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryJobRepository, InMemoryUserRepository, default_accounts};

use super::ServerConfig;

/// Construct both domain services over fresh in-memory repositories.
///
/// Seeds the default accounts when the configuration asks for it.
///
/// # Errors
/// Returns [`io::Error`] when the hashing cost is rejected or seeding fails.
pub async fn build_http_state(config: &ServerConfig) -> io::Result<web::Data<HttpState>> {
    let hasher = PasswordHasher::with_cost(config.hashing_cost)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let credentials = Arc::new(CredentialStore::new(
        Arc::new(InMemoryUserRepository::new()),
        hasher,
    ));
    if config.seed_users {
        credentials
            .seed(default_accounts())
            .await
            .map_err(|err| io::Error::other(format!("seeding users failed: {err}")))?;
    } else {
        info!("user seeding disabled");
    }

    let jobs = Arc::new(JobBoard::new(
        Arc::new(InMemoryJobRepository::new()),
        Arc::new(DefaultClock),
    ));

    Ok(web::Data::new(HttpState::new(HttpStatePorts {
        login: credentials.clone(),
        users: credentials.clone(),
        registration: credentials,
        jobs_query: jobs.clone(),
        jobs_command: jobs,
    })))
}
