//! Job listings: the draft posted by admins and the flows that keep the
//! job store current.

use serde::Serialize;
use tracing::{debug, info};

use crate::api::PortalApi;
use crate::error::ClientError;
use crate::model::Job;
use crate::resource::{ResourceEvent, ResourceStore, StateContainer};

/// Shown when fetching jobs fails without a server-supplied reason.
pub const FETCH_JOBS_FALLBACK: &str = "Failed to fetch jobs.";
/// Shown when posting a job fails without a server-supplied reason.
pub const CREATE_JOB_FALLBACK: &str = "Failed to create job.";
/// Shown when the salary is missing, not a number, or not above zero.
pub const INVALID_SALARY_MESSAGE: &str = "Salary must be a positive number";

/// Store of posted jobs.
pub type JobStore = ResourceStore<Job>;

/// A job about to be posted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    /// Hiring company.
    pub company_name: String,
    /// Position title.
    pub job_title: String,
    /// Free-form description.
    pub description: String,
    /// Offered salary; must be finite and above zero.
    pub salary: f64,
}

impl JobDraft {
    /// Build a draft from form input, parsing the salary text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when the salary text is not a
    /// number. Range and blank checks happen in [`Self::validate`].
    pub fn from_form(
        company_name: impl Into<String>,
        job_title: impl Into<String>,
        description: impl Into<String>,
        salary: &str,
    ) -> Result<Self, ClientError> {
        let parsed = salary
            .trim()
            .parse::<f64>()
            .map_err(|_| ClientError::validation("salary", INVALID_SALARY_MESSAGE))?;
        Ok(Self {
            company_name: company_name.into(),
            job_title: job_title.into(),
            description: description.into(),
            salary: parsed,
        })
    }

    /// Check the draft before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ClientError> {
        for (field, value) in [
            ("companyName", &self.company_name),
            ("jobTitle", &self.job_title),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(ClientError::validation(field, format!("{field} is required")));
            }
        }
        if !self.salary.is_finite() || self.salary <= 0.0 {
            return Err(ClientError::validation("salary", INVALID_SALARY_MESSAGE));
        }
        Ok(())
    }
}

/// Replace the store's items with the server's listing.
///
/// # Errors
///
/// Returns the [`ClientError`] raised by `api`; its message is also stored.
pub async fn fetch_jobs<A>(api: &A, store: &JobStore) -> Result<(), ClientError>
where
    A: PortalApi + ?Sized,
{
    store.dispatch(ResourceEvent::FetchPending);
    match api.list_jobs().await {
        Ok(jobs) => {
            debug!(count = jobs.len(), "jobs fetched");
            store.dispatch(ResourceEvent::FetchFulfilled(jobs));
            Ok(())
        }
        Err(err) => {
            store.dispatch(ResourceEvent::FetchRejected(err.user_message()));
            Err(err)
        }
    }
}

/// Post `draft` and append the stored record.
///
/// An invalid draft is refused before any request and leaves the store
/// untouched.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] for an invalid draft, otherwise the
/// error raised by `api`.
pub async fn create_job<A>(api: &A, store: &JobStore, draft: &JobDraft) -> Result<Job, ClientError>
where
    A: PortalApi + ?Sized,
{
    draft.validate()?;
    store.dispatch(ResourceEvent::CreatePending);
    match api.create_job(draft).await {
        Ok(job) => {
            info!(job_id = job.id, company = %job.company_name, "job posted");
            store.dispatch(ResourceEvent::CreateFulfilled(job.clone()));
            Ok(job)
        }
        Err(err) => {
            store.dispatch(ResourceEvent::CreateRejected(err.user_message()));
            Err(err)
        }
    }
}
