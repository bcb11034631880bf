//! User roster domain services.
//!
//! These services implement the roster driving ports on top of a
//! [`UserRepository`]. Imports are parsed in full before anything is stored,
//! so a failing import leaves the roster untouched.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tracing::{error, info, warn};

use crate::domain::ports::{
    CreateUserRequest, DeleteOutcome, UserRepository, UserRepositoryError, UserRosterCommand,
    UserRosterQuery,
};
use crate::domain::{
    AgeSummary, Error, ImportError, UserRecord, average_age_by_initial, parse_user_table,
};

fn map_repository_error(err: UserRepositoryError) -> Error {
    error!(error = %err, "user repository failure");
    Error::internal(format!("user repository error: {err}"))
}

fn map_import_error(err: &ImportError) -> Error {
    let mut details = Map::new();
    details.insert("code".to_owned(), json!(err.code()));
    if let Some(column) = err.column() {
        details.insert("column".to_owned(), json!(column));
    }
    if let Some(row) = err.row() {
        details.insert("row".to_owned(), json!(row));
    }
    Error::invalid_request(format!("Invalid data: {err}")).with_details(Value::Object(details))
}

/// Roster service implementing the command driving port.
#[derive(Clone)]
pub struct UserRosterCommandService<R> {
    user_repo: Arc<R>,
}

impl<R> UserRosterCommandService<R> {
    /// Create a command service over the given repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserRosterCommand for UserRosterCommandService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<(), Error> {
        let record = UserRecord::from(request);
        info!(name = record.name(), age = record.age(), "creating user");
        self.user_repo
            .append(vec![record])
            .await
            .map_err(map_repository_error)
    }

    async fn delete_user(&self, name: &str) -> Result<DeleteOutcome, Error> {
        let removed = self
            .user_repo
            .remove_by_name(name)
            .await
            .map_err(map_repository_error)?;
        if removed == 0 {
            info!(name, "no users matched delete");
            return Ok(DeleteOutcome::NotFound);
        }
        info!(name, removed, "deleted users");
        Ok(DeleteOutcome::Deleted(removed))
    }

    async fn import_users(&self, data: &[u8]) -> Result<usize, Error> {
        let records = parse_user_table(data).map_err(|err| {
            warn!(error = %err, bytes = data.len(), "rejected user import");
            map_import_error(&err)
        })?;
        let count = records.len();
        self.user_repo
            .append(records)
            .await
            .map_err(map_repository_error)?;
        info!(count, "imported users");
        Ok(count)
    }
}

/// Roster service implementing the query driving port.
#[derive(Clone)]
pub struct UserRosterQueryService<R> {
    user_repo: Arc<R>,
}

impl<R> UserRosterQueryService<R> {
    /// Create a query service over the given repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserRosterQuery for UserRosterQueryService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error> {
        self.user_repo.list().await.map_err(map_repository_error)
    }

    async fn average_age_by_initial(&self) -> Result<AgeSummary, Error> {
        let records = self.user_repo.list().await.map_err(map_repository_error)?;
        Ok(average_age_by_initial(&records))
    }
}

#[cfg(test)]
#[path = "user_roster_service_tests.rs"]
mod tests;
