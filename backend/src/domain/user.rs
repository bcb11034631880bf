//! User record model.
//!
//! A record is a `(name, age)` pair. Records created one at a time go through
//! [`UserAge`] validation; records from a bulk import are taken as parsed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest accepted age for a single-record create.
pub const USER_AGE_MIN: i64 = 0;
/// Highest accepted age for a single-record create.
pub const USER_AGE_MAX: i64 = 120;

/// Validation errors returned by [`UserAge`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAgeValidationError {
    /// The text is not a plain run of ASCII digits.
    NotAnInteger {
        /// Text as received.
        raw: String,
    },
    /// The integer falls outside `USER_AGE_MIN..=USER_AGE_MAX`.
    OutOfRange {
        /// Rejected value.
        value: i64,
    },
}

impl fmt::Display for UserAgeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger { raw } => write!(f, "age '{raw}' is not an integer"),
            Self::OutOfRange { value } => write!(
                f,
                "age {value} is outside {USER_AGE_MIN}..={USER_AGE_MAX}"
            ),
        }
    }
}

impl std::error::Error for UserAgeValidationError {}

/// Age in years, guaranteed to be within `USER_AGE_MIN..=USER_AGE_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserAge(i64);

impl UserAge {
    /// Validate an integer age.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::UserAge;
    ///
    /// assert!(UserAge::new(30).is_ok());
    /// assert!(UserAge::new(121).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, UserAgeValidationError> {
        if (USER_AGE_MIN..=USER_AGE_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(UserAgeValidationError::OutOfRange { value })
        }
    }

    /// Parse and validate an age from text, such as a path segment.
    ///
    /// Only unsigned decimal digits are accepted, so `+5` and `-0` are not
    /// integers here. Leading zeros are allowed.
    pub fn parse(raw: &str) -> Result<Self, UserAgeValidationError> {
        let not_an_integer = || UserAgeValidationError::NotAnInteger {
            raw: raw.to_owned(),
        };
        if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(not_an_integer());
        }
        let value = raw.parse::<i64>().map_err(|_| not_an_integer())?;
        Self::new(value)
    }

    /// The age in years.
    pub fn get(self) -> i64 {
        self.0
    }
}

/// A single user entry.
///
/// Serialised as `{"name": "...", "age": 30}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    name: String,
    age: i64,
}

impl UserRecord {
    /// Build a record from a validated age.
    pub fn new(name: impl Into<String>, age: UserAge) -> Self {
        Self {
            name: name.into(),
            age: age.get(),
        }
    }

    /// Build a record from imported tabular data.
    ///
    /// The age is not range checked; imports accept whatever integer the
    /// source row holds.
    pub fn imported(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Display name, possibly empty or repeated across records.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Grouping key: the first character of the name, if any.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
