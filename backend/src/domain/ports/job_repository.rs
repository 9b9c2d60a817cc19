//! Driven port for job storage.
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Job, NewJob};

use super::define_port_error;

define_port_error! {
    /// Failures raised by job repository adapters.
    pub enum JobPersistenceError {
        /// Query or mutation failed during execution.
        Query { message: String } => "job repository query failed: {message}",
    }
}

/// Append-only storage for job postings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Append a posting with the next sequential id.
    async fn insert(
        &self,
        candidate: NewJob,
        created_at: DateTime<Utc>,
    ) -> Result<Job, JobPersistenceError>;

    /// Every posting in insertion order.
    async fn list(&self) -> Result<Vec<Job>, JobPersistenceError>;
}
