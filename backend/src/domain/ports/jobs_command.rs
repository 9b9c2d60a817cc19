//! Driving port for posting jobs.

use async_trait::async_trait;

use crate::domain::{Error, Job, NewJob};

/// Use-case port for creating job postings.
#[async_trait]
pub trait JobsCommand: Send + Sync {
    /// Store a validated posting and return the canonical record.
    async fn create_job(&self, candidate: NewJob) -> Result<Job, Error>;
}
