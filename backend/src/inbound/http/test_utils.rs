//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use crate::domain::{CredentialStore, HashingCost, JobBoard, PasswordHasher};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryJobRepository, InMemoryUserRepository, default_accounts};

/// Fresh handler state backed by in-memory repositories.
///
/// - Uses the cheapest Argon2 parameters so tests stay fast.
/// - Seeds the default accounts, so ids 1 to 4 are taken.
/// - Starts with no job postings.
pub async fn test_state() -> web::Data<HttpState> {
    let hasher = PasswordHasher::with_cost(HashingCost::minimal()).expect("minimal cost is valid");
    let credentials = Arc::new(CredentialStore::new(
        Arc::new(InMemoryUserRepository::new()),
        hasher,
    ));
    credentials
        .seed(default_accounts())
        .await
        .expect("seeding an empty store succeeds");
    let jobs = Arc::new(JobBoard::new(
        Arc::new(InMemoryJobRepository::new()),
        Arc::new(DefaultClock),
    ));

    web::Data::new(HttpState::new(HttpStatePorts {
        login: credentials.clone(),
        users: credentials.clone(),
        registration: credentials,
        jobs_query: jobs.clone(),
        jobs_command: jobs,
    }))
}
