//! Driving port for account creation.

use async_trait::async_trait;

use crate::domain::{Error, UserCandidate, UserView};

/// Use-case port for creating accounts.
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate and store a new account.
    ///
    /// Fails with `invalid_request` for an absent or unknown role and with
    /// `conflict` for a taken username; the role check runs first.
    async fn create(&self, candidate: UserCandidate) -> Result<UserView, Error>;
}
