//! Driving port for user roster reads.

use async_trait::async_trait;

use crate::domain::{AgeSummary, Error, UserRecord};

/// Domain use-case port for reading the roster.
#[async_trait]
pub trait UserRosterQuery: Send + Sync {
    /// Every record in insertion order.
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error>;

    /// Mean age grouped by the first character of each name.
    async fn average_age_by_initial(&self) -> Result<AgeSummary, Error>;
}
