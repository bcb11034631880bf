//! Mutex-guarded in-memory implementation of [`UserRepository`].

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::domain::ports::{UserRepository, UserRepositoryError};

/// User records held in insertion order behind a single lock.
///
/// Every operation takes the lock once, so a batch append is never
/// interleaved with another writer.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, UserRepositoryError> {
        self.records
            .lock()
            .map_err(|_| UserRepositoryError::unavailable("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn append(&self, records: Vec<UserRecord>) -> Result<(), UserRepositoryError> {
        self.lock()?.extend(records);
        Ok(())
    }

    async fn remove_by_name(&self, name: &str) -> Result<usize, UserRepositoryError> {
        let mut guard = self.lock()?;
        let before = guard.len();
        guard.retain(|record| record.name() != name);
        Ok(before - guard.len())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, UserRepositoryError> {
        Ok(self.lock()?.clone())
    }
}
