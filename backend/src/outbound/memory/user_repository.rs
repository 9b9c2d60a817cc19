//! Process-local `UserRepository`.
//!
//! Records live in a `Vec` behind a `tokio` `RwLock`. The uniqueness check
//! and the append happen under one write guard, so two concurrent creates
//! for the same username cannot both succeed.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId, Username};

#[derive(Debug)]
struct Ledger {
    users: Vec<User>,
    next_id: u64,
}

/// In-memory user storage. Identifiers start at 1.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    ledger: RwLock<Ledger>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(Ledger {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, candidate: NewUser) -> Result<User, UserPersistenceError> {
        let mut ledger = self.ledger.write().await;
        if ledger
            .users
            .iter()
            .any(|user| user.username() == candidate.username())
        {
            debug!(username = %candidate.username(), "duplicate username rejected");
            return Err(UserPersistenceError::duplicate_username(
                candidate.username().as_ref(),
            ));
        }

        let id = UserId::new(ledger.next_id);
        ledger.next_id += 1;
        let user = User::new(id, candidate);
        ledger.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let ledger = self.ledger.read().await;
        Ok(ledger
            .users
            .iter()
            .find(|user| user.username() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let ledger = self.ledger.read().await;
        Ok(ledger.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.ledger.read().await.users.clone())
    }
}
