//! Domain primitives and services.
//!
//! Purpose: define the user record model, tabular import, age aggregation and
//! the roster services. Types here stay free of HTTP concerns; inbound
//! adapters translate them at the edge.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - UserRecord / UserAge: the stored entry and its validated age.
//! - parse_user_table: CSV/TSV to records.
//! - average_age_by_initial: grouped mean ages.
//! - UserRosterCommandService / UserRosterQueryService: roster use-cases.

pub mod age_summary;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_import;
pub mod user_roster_service;

pub use self::age_summary::{AgeSummary, average_age_by_initial};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{USER_AGE_MAX, USER_AGE_MIN, UserAge, UserAgeValidationError, UserRecord};
pub use self::user_import::{ImportError, parse_user_table};
pub use self::user_roster_service::{UserRosterCommandService, UserRosterQueryService};
