//! Credential store: account creation, login resolution and user reads.
//!
//! One instance is built at startup and shared by every handler through the
//! driving ports it implements. Tests build a fresh instance each, so no
//! state leaks between them.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::ports::{
    LoginService, UserPersistenceError, UserRegistration, UserRepository, UsersQuery,
};
use super::{
    Error, LoginCredentials, NewUser, PasswordDigest, PasswordHasher, Role,
    UserCandidate, UserId, UserValidationError, UserView, Username,
};

/// Message returned for any credential mismatch.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid credentials";
/// Message returned when a username is already registered.
pub const DUPLICATE_USERNAME_MESSAGE: &str = "Username already exists";

/// Domain service owning user accounts.
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl CredentialStore {
    /// Build a store over a user repository.
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Resolve credentials to the matching user.
    ///
    /// The username must match exactly and the password must verify against
    /// the stored digest. Any mismatch is `not_found`.
    pub async fn resolve(&self, credentials: &LoginCredentials) -> Result<UserView, Error> {
        let Some(user) = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_persistence_error)?
        else {
            debug!("login rejected: unknown username");
            return Err(Error::not_found(INVALID_CREDENTIALS_MESSAGE));
        };

        let password = Zeroizing::new(credentials.password().to_owned());
        if self.verify(user.password().clone(), password).await? {
            debug!(user_id = %user.id(), "login resolved");
            Ok(user.view())
        } else {
            debug!(user_id = %user.id(), "login rejected: password mismatch");
            Err(Error::not_found(INVALID_CREDENTIALS_MESSAGE))
        }
    }

    /// Fetch one user by identifier.
    pub async fn lookup_by_id(&self, id: UserId) -> Result<UserView, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .map(|user| user.view())
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }

    /// Validate and store a new account.
    ///
    /// The role is checked before anything else, then the remaining fields,
    /// then username uniqueness (inside the repository, atomically with the
    /// append). Nothing is stored on failure.
    pub async fn create(&self, candidate: UserCandidate) -> Result<UserView, Error> {
        let UserCandidate {
            username,
            password,
            email,
            name,
            role,
        } = candidate;

        let role = Role::parse_optional(role.as_deref()).map_err(|err| invalid_user_field(&err))?;
        let username = Username::new(&username).map_err(|err| invalid_user_field(&err))?;
        if password.is_empty() {
            return Err(invalid_user_field(&UserValidationError::EmptyPassword));
        }

        let digest = self.hash(password).await?;
        let stored = self
            .users
            .insert(NewUser::new(username, digest, email, name, role))
            .await
            .map_err(map_persistence_error)?;

        info!(user_id = %stored.id(), role = %stored.role(), "user created");
        Ok(stored.view())
    }

    /// Every user, passwords stripped, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<UserView>, Error> {
        let users = self.users.list().await.map_err(map_persistence_error)?;
        Ok(users.iter().map(|user| user.view()).collect())
    }

    /// Create each account in order, stopping at the first failure.
    pub async fn seed<I>(&self, accounts: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = UserCandidate>,
    {
        let mut created = 0_usize;
        for account in accounts {
            self.create(account).await?;
            created += 1;
        }
        info!(count = created, "seeded user accounts");
        Ok(created)
    }

    // Argon2 is CPU-bound; keep it off the async worker threads.
    async fn hash(&self, password: Zeroizing<String>) -> Result<PasswordDigest, Error> {
        let hasher = self.hasher.clone();
        run_blocking(move || hasher.hash(&password))
            .await?
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))
    }

    async fn verify(&self, digest: PasswordDigest, password: Zeroizing<String>) -> Result<bool, Error> {
        let hasher = self.hasher.clone();
        run_blocking(move || hasher.verify(&digest, &password)).await
    }
}

async fn run_blocking<T, F>(work: F) -> Result<T, Error>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| Error::internal(format!("blocking task failed: {err}")))
}

fn invalid_user_field(err: &UserValidationError) -> Error {
    let (field, code) = match err {
        UserValidationError::MissingRole => ("type", "missing_type"),
        UserValidationError::UnknownRole { .. } => ("type", "invalid_type"),
        UserValidationError::EmptyUsername => ("username", "empty_username"),
        UserValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::DuplicateUsername { .. } => Error::conflict(
            DUPLICATE_USERNAME_MESSAGE,
        )
        .with_details(json!({ "field": "username", "code": "duplicate_username" })),
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository failed: {message}"))
        }
    }
}

#[async_trait]
impl LoginService for CredentialStore {
    async fn resolve(&self, credentials: &LoginCredentials) -> Result<UserView, Error> {
        CredentialStore::resolve(self, credentials).await
    }
}

#[async_trait]
impl UsersQuery for CredentialStore {
    async fn list_all(&self) -> Result<Vec<UserView>, Error> {
        CredentialStore::list_all(self).await
    }

    async fn lookup_by_id(&self, id: UserId) -> Result<UserView, Error> {
        CredentialStore::lookup_by_id(self, id).await
    }
}

#[async_trait]
impl UserRegistration for CredentialStore {
    async fn create(&self, candidate: UserCandidate) -> Result<UserView, Error> {
        CredentialStore::create(self, candidate).await
    }
}

#[cfg(test)]
mod tests;
