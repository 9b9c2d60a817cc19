//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{JobsCommand, JobsQuery, LoginService, UserRegistration, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Resolves login credentials.
    pub login: Arc<dyn LoginService>,
    /// Reads user accounts.
    pub users: Arc<dyn UsersQuery>,
    /// Creates user accounts.
    pub registration: Arc<dyn UserRegistration>,
    /// Reads job postings.
    pub jobs_query: Arc<dyn JobsQuery>,
    /// Creates job postings.
    pub jobs_command: Arc<dyn JobsCommand>,
}

/// Parameter object bundling the port implementations for [`HttpState`].
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Resolves login credentials.
    pub login: Arc<dyn LoginService>,
    /// Reads user accounts.
    pub users: Arc<dyn UsersQuery>,
    /// Creates user accounts.
    pub registration: Arc<dyn UserRegistration>,
    /// Reads job postings.
    pub jobs_query: Arc<dyn JobsQuery>,
    /// Creates job postings.
    pub jobs_command: Arc<dyn JobsCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            users,
            registration,
            jobs_query,
            jobs_command,
        } = ports;
        Self {
            login,
            users,
            registration,
            jobs_query,
            jobs_command,
        }
    }
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use jobboard::domain::{CredentialStore, JobBoard, PasswordHasher};
    /// use jobboard::inbound::http::state::{HttpState, HttpStatePorts};
    /// use jobboard::outbound::memory::{InMemoryJobRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let credentials = Arc::new(CredentialStore::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     PasswordHasher::default(),
    /// ));
    /// let jobs = Arc::new(JobBoard::new(
    ///     Arc::new(InMemoryJobRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     login: credentials.clone(),
    ///     users: credentials.clone(),
    ///     registration: credentials,
    ///     jobs_query: jobs.clone(),
    ///     jobs_command: jobs,
    /// });
    /// let _ = state.users.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        Self::from(ports)
    }
}
