//! Job board service: posting and listing jobs.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use super::ports::{JobPersistenceError, JobRepository, JobsCommand, JobsQuery};
use super::{Error, Job, NewJob};

/// Domain service owning job postings.
#[derive(Clone)]
pub struct JobBoard {
    jobs: Arc<dyn JobRepository>,
    clock: Arc<dyn Clock>,
}

impl JobBoard {
    /// Build the service over a repository and a clock used for `createdAt`.
    pub fn new(jobs: Arc<dyn JobRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { jobs, clock }
    }

    /// Every posting in insertion order.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, Error> {
        self.jobs.list().await.map_err(map_persistence_error)
    }

    /// Store a posting stamped with the current time.
    pub async fn create_job(&self, candidate: NewJob) -> Result<Job, Error> {
        let job = self
            .jobs
            .insert(candidate, self.clock.utc())
            .await
            .map_err(map_persistence_error)?;
        info!(job_id = %job.id, "job posted");
        Ok(job)
    }
}

fn map_persistence_error(err: JobPersistenceError) -> Error {
    match err {
        JobPersistenceError::Query { message } => {
            Error::internal(format!("job repository failed: {message}"))
        }
    }
}

#[async_trait]
impl JobsQuery for JobBoard {
    async fn list_jobs(&self) -> Result<Vec<Job>, Error> {
        JobBoard::list_jobs(self).await
    }
}

#[async_trait]
impl JobsCommand for JobBoard {
    async fn create_job(&self, candidate: NewJob) -> Result<Job, Error> {
        JobBoard::create_job(self, candidate).await
    }
}
