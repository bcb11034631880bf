//! Driving port for user roster mutations.
//!
//! HTTP handlers call this port to create, delete and bulk-import records.
//! Requests arrive already shaped; validation of raw input happens while
//! building [`CreateUserRequest`].

use async_trait::async_trait;

use crate::domain::{Error, UserAge, UserAgeValidationError, UserRecord};

/// Validated input for a single-record create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// Name to store verbatim.
    pub name: String,
    /// Range-checked age.
    pub age: UserAge,
}

impl CreateUserRequest {
    /// Build a request from raw text, such as URL path segments.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::ports::CreateUserRequest;
    ///
    /// let request = CreateUserRequest::try_from_parts("Alice", "30").expect("valid input");
    /// assert_eq!(request.age.get(), 30);
    /// assert!(CreateUserRequest::try_from_parts("Alice", "abc").is_err());
    /// ```
    pub fn try_from_parts(name: &str, age: &str) -> Result<Self, UserAgeValidationError> {
        Ok(Self {
            name: name.to_owned(),
            age: UserAge::parse(age)?,
        })
    }
}

impl From<CreateUserRequest> for UserRecord {
    fn from(value: CreateUserRequest) -> Self {
        Self::new(value.name, value.age)
    }
}

/// Result of deleting by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// At least one record matched; holds the number removed.
    Deleted(usize),
    /// No record carried the name; nothing changed.
    NotFound,
}

/// Domain use-case port for roster mutations.
#[async_trait]
pub trait UserRosterCommand: Send + Sync {
    /// Append one record.
    async fn create_user(&self, request: CreateUserRequest) -> Result<(), Error>;

    /// Remove every record with exactly this name.
    async fn delete_user(&self, name: &str) -> Result<DeleteOutcome, Error>;

    /// Parse tabular text and append every row, or nothing on failure.
    ///
    /// Returns the number of records appended.
    async fn import_users(&self, data: &[u8]) -> Result<usize, Error>;
}
