//! Driving port for login.
//!
//! Inbound adapters resolve credentials through this trait without knowing
//! how users are stored or how passwords are checked.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserView};

/// Use-case port for resolving credentials.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve credentials to the matching user.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`crate::domain::ErrorCode::NotFound`].
    async fn resolve(&self, credentials: &LoginCredentials) -> Result<UserView, Error>;
}
