//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserView};

/// Use-case port for reading password-free user views.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users in insertion order.
    async fn list_all(&self) -> Result<Vec<UserView>, Error>;

    /// A single user, or [`crate::domain::ErrorCode::NotFound`].
    async fn lookup_by_id(&self, id: UserId) -> Result<UserView, Error>;
}
