//! Driven port for ordered user record storage.

use async_trait::async_trait;

use crate::domain::UserRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user record storage adapters.
    pub enum UserRepositoryError {
        /// The backing store cannot be used.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Ordered, insertion-preserving storage for user records.
///
/// Implementations must apply each call atomically: concurrent callers never
/// observe half of an `append` batch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append records to the end of the sequence, in order.
    async fn append(&self, records: Vec<UserRecord>) -> Result<(), UserRepositoryError>;

    /// Remove every record whose name equals `name`, returning how many went.
    async fn remove_by_name(&self, name: &str) -> Result<usize, UserRepositoryError>;

    /// Snapshot of all records in insertion order.
    async fn list(&self) -> Result<Vec<UserRecord>, UserRepositoryError>;
}
