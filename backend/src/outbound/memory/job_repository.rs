//! Process-local `JobRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::ports::{JobPersistenceError, JobRepository};
use crate::domain::{Job, JobId, NewJob};

#[derive(Debug)]
struct Ledger {
    jobs: Vec<Job>,
    next_id: u64,
}

/// In-memory job storage. Identifiers start at 1.
#[derive(Debug)]
pub struct InMemoryJobRepository {
    ledger: RwLock<Ledger>,
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryJobRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(Ledger {
                jobs: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn insert(
        &self,
        candidate: NewJob,
        created_at: DateTime<Utc>,
    ) -> Result<Job, JobPersistenceError> {
        let mut ledger = self.ledger.write().await;
        let id = JobId::new(ledger.next_id);
        ledger.next_id += 1;
        let job = Job::new(id, candidate, created_at);
        ledger.jobs.push(job.clone());
        Ok(job)
    }

    async fn list(&self) -> Result<Vec<Job>, JobPersistenceError> {
        Ok(self.ledger.read().await.jobs.clone())
    }
}
