//! HTTP boundary of the job board.
//!
//! [`PortalApi`] names the five calls the client makes. [`HttpPortalApi`]
//! performs them with reqwest against a fixed API root; stores only ever see
//! the trait.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ClientConfig, parse_base_url};
use crate::error::ClientError;
use crate::jobs::{CREATE_JOB_FALLBACK, FETCH_JOBS_FALLBACK, JobDraft};
use crate::model::{Job, LoginCredentials, Registration, UserView};
use crate::session::{LOGIN_FALLBACK, REGISTER_FALLBACK};
use crate::users::FETCH_USERS_FALLBACK;

/// One call across the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `POST /login`
    Login,
    /// `POST /create`
    Register,
    /// `GET /jobs`
    ListJobs,
    /// `POST /create/job`
    CreateJob,
    /// `GET /getAll`
    ListUsers,
}

impl Operation {
    /// Message shown when the server gives no reason of its own.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => LOGIN_FALLBACK,
            Self::Register => REGISTER_FALLBACK,
            Self::ListJobs => FETCH_JOBS_FALLBACK,
            Self::CreateJob => CREATE_JOB_FALLBACK,
            Self::ListUsers => FETCH_USERS_FALLBACK,
        }
    }

    const fn path(self) -> &'static [&'static str] {
        match self {
            Self::Login => &["login"],
            Self::Register => &["create"],
            Self::ListJobs => &["jobs"],
            Self::CreateJob => &["create", "job"],
            Self::ListUsers => &["getAll"],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::ListJobs => "list jobs",
            Self::CreateJob => "create job",
            Self::ListUsers => "list users",
        })
    }
}

/// Calls the client makes against the job board API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Resolve credentials to the signed-in user.
    async fn login(&self, credentials: &LoginCredentials) -> Result<UserView, ClientError>;

    /// Create an account. The role is checked before sending.
    async fn register(&self, registration: &Registration) -> Result<UserView, ClientError>;

    /// Every posted job in creation order.
    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError>;

    /// Post a job and receive the stored record.
    async fn create_job(&self, draft: &JobDraft) -> Result<Job, ClientError>;

    /// Every account, without passwords.
    async fn list_users(&self) -> Result<Vec<UserView>, ClientError>;
}

#[derive(Deserialize)]
struct JobsEnvelope {
    jobs: Vec<Job>,
}

#[derive(Deserialize)]
struct JobEnvelope {
    job: Job,
}

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<UserView>,
}

#[derive(Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Reqwest-backed [`PortalApi`].
#[derive(Debug, Clone)]
pub struct HttpPortalApi {
    client: Client,
    base_url: Url,
}

impl HttpPortalApi {
    /// Build an adapter rooted at `base_url`, e.g. `http://localhost:3000/user`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the URL is unusable or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .build()
            .map_err(|err| ClientError::config(err.to_string()))?;
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Build an adapter from client settings.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(config.base_url().as_str())
    }

    fn endpoint(&self, operation: Operation) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are validated as http(s), so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(operation.path());
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        debug!(%operation, "calling job board api");
        let response = request
            .send()
            .await
            .map_err(|err| transport_error(operation, &err))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| transport_error(operation, &err))?;

        if !status.is_success() {
            let message = message_from_body(operation, body.as_ref());
            warn!(%operation, status = status.as_u16(), %message, "api call rejected");
            return Err(status_error(operation, status, message));
        }

        serde_json::from_slice(body.as_ref()).map_err(|err| ClientError::Decode {
            operation,
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<UserView, ClientError> {
        let url = self.endpoint(Operation::Login);
        self.send(Operation::Login, self.client.post(url).json(credentials))
            .await
    }

    async fn register(&self, registration: &Registration) -> Result<UserView, ClientError> {
        let body = registration.to_body()?;
        let url = self.endpoint(Operation::Register);
        self.send(Operation::Register, self.client.post(url).json(&body))
            .await
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let url = self.endpoint(Operation::ListJobs);
        let envelope: JobsEnvelope = self.send(Operation::ListJobs, self.client.get(url)).await?;
        Ok(envelope.jobs)
    }

    async fn create_job(&self, draft: &JobDraft) -> Result<Job, ClientError> {
        let url = self.endpoint(Operation::CreateJob);
        let envelope: JobEnvelope = self
            .send(Operation::CreateJob, self.client.post(url).json(draft))
            .await?;
        Ok(envelope.job)
    }

    async fn list_users(&self) -> Result<Vec<UserView>, ClientError> {
        let url = self.endpoint(Operation::ListUsers);
        let envelope: UsersEnvelope =
            self.send(Operation::ListUsers, self.client.get(url)).await?;
        Ok(envelope.users)
    }
}

fn transport_error(operation: Operation, error: &reqwest::Error) -> ClientError {
    ClientError::Network {
        operation,
        message: error.to_string(),
    }
}

fn status_error(operation: Operation, status: StatusCode, message: String) -> ClientError {
    ClientError::Api {
        operation,
        status: status.as_u16(),
        message,
    }
}

/// Pick the first non-blank of `message` and `error`, else the fallback.
fn message_from_body(operation: Operation, body: &[u8]) -> String {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    [parsed.message, parsed.error]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
        .unwrap_or_else(|| operation.fallback_message().to_owned())
}
