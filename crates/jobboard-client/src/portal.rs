//! Everything a front end talks to, in one place.

use crate::api::{HttpPortalApi, PortalApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, StorageError};
use crate::guard::{Navigation, navigate};
use crate::jobs::{self, JobDraft, JobStore};
use crate::model::{Job, LoginCredentials, Registration, UserView};
use crate::resource::StateContainer;
use crate::session::SessionStore;
use crate::storage::{FileSessionStorage, SessionStorage};
use crate::users::{self, UserStore};

/// API client, session and both resource stores.
#[derive(Debug)]
pub struct Portal<A = HttpPortalApi, S = FileSessionStorage> {
    api: A,
    session: SessionStore<S>,
    jobs: JobStore,
    users: UserStore,
}

impl Portal {
    /// Connect to the configured API and restore the saved session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the HTTP client cannot be built
    /// and [`ClientError::Storage`] when the session directory cannot be
    /// opened.
    pub fn open(config: &ClientConfig) -> Result<Self, ClientError> {
        let api = HttpPortalApi::from_config(config)?;
        let storage = FileSessionStorage::open(config.storage_dir())?;
        Ok(Self::new(api, storage))
    }
}

impl<A: PortalApi, S: SessionStorage> Portal<A, S> {
    /// Assemble a portal; the session is restored from `storage`.
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            session: SessionStore::restore(storage),
            jobs: JobStore::new(),
            users: UserStore::new(),
        }
    }

    /// Session store.
    pub const fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Job store.
    pub const fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    /// User store.
    pub const fn users(&self) -> &UserStore {
        &self.users
    }

    /// See [`SessionStore::login`].
    ///
    /// # Errors
    ///
    /// Propagates the login failure.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<UserView, ClientError> {
        self.session.login(&self.api, credentials).await
    }

    /// See [`SessionStore::register`].
    ///
    /// # Errors
    ///
    /// Propagates the registration failure.
    pub async fn register(&self, registration: &Registration) -> Result<UserView, ClientError> {
        self.session.register(&self.api, registration).await
    }

    /// See [`SessionStore::logout`].
    ///
    /// # Errors
    ///
    /// Propagates the storage failure.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.session.logout()
    }

    /// See [`jobs::fetch_jobs`].
    ///
    /// # Errors
    ///
    /// Propagates the fetch failure.
    pub async fn fetch_jobs(&self) -> Result<(), ClientError> {
        jobs::fetch_jobs(&self.api, &self.jobs).await
    }

    /// See [`jobs::create_job`].
    ///
    /// # Errors
    ///
    /// Propagates the validation or create failure.
    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job, ClientError> {
        jobs::create_job(&self.api, &self.jobs, draft).await
    }

    /// See [`users::fetch_users`].
    ///
    /// # Errors
    ///
    /// Propagates the fetch failure.
    pub async fn fetch_users(&self) -> Result<(), ClientError> {
        users::fetch_users(&self.api, &self.users).await
    }

    /// Resolve `path` against the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        navigate(path, &self.session.state())
    }
}
