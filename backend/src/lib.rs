//! User roster service library.
//!
//! An in-memory store of `{name, age}` records exposed over HTTP: single
//! creates, deletes by name, listing, CSV bulk import and average age by
//! initial.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
