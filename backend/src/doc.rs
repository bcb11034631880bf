//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every roster and health endpoint together with the
//! schema mirrors from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use crate::inbound::http::health::ProbeStatus;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserRecordSchema};
use crate::inbound::http::users::{AverageAgeResponse, MessageResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User roster API",
        description = "In-memory user records with CSV import and age statistics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::import_users_csv,
        crate::inbound::http::users::average_age,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRecordSchema,
        ErrorSchema,
        ErrorCodeSchema,
        MessageResponse,
        AverageAgeResponse,
        ProbeStatus
    )),
    tags(
        (name = "users", description = "User record operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
