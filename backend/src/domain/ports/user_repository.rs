//! Driven port for user storage.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Another record already owns the username.
        DuplicateUsername { username: String } => "username already taken: {username}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for user records.
///
/// Implementations assign identifiers and must perform the uniqueness check
/// and the append atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a new user with the next sequential id, unless the username is
    /// already taken.
    async fn insert(&self, candidate: NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch the record owning `username`.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Every record in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
