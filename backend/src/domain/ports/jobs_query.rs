//! Driving port for reading job postings.

use async_trait::async_trait;

use crate::domain::{Error, Job};

/// Use-case port for listing jobs.
#[async_trait]
pub trait JobsQuery: Send + Sync {
    /// Every posting in insertion order.
    async fn list_jobs(&self) -> Result<Vec<Job>, Error>;
}
