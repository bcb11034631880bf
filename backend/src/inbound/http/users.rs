//! Users API handlers.
//!
//! ```text
//! POST   /users/{name}/{age}
//! DELETE /users/{name}
//! GET    /users
//! POST   /users/csv           (multipart, field "file")
//! GET    /users/average_age
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::{CreateUserRequest, DeleteOutcome};
use crate::domain::{
    AgeSummary, Error, USER_AGE_MAX, USER_AGE_MIN, UserAgeValidationError, UserRecord,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserRecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::upload::read_file_part;

pub(crate) const USER_CREATED: &str = "User created successfully";
pub(crate) const USER_DELETED: &str = "User deleted successfully";
pub(crate) const USERS_ADDED: &str = "Users added successfully";
pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const INVALID_AGE: &str = "Invalid input: age must be an integer between 0 and 120";

/// Acknowledgement body for successful mutations.
///
/// Example JSON: `{"message":"User created successfully"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    #[schema(example = "User created successfully")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Mean age keyed by name initial.
///
/// Example JSON: `{"A": 25.0, "B": 40.0}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AverageAgeResponse(BTreeMap<String, f64>);

impl From<AgeSummary> for AverageAgeResponse {
    fn from(value: AgeSummary) -> Self {
        Self(value)
    }
}

fn map_age_validation_error(err: &UserAgeValidationError) -> Error {
    let details = match err {
        UserAgeValidationError::NotAnInteger { raw } => {
            json!({ "field": "age", "code": "not_an_integer", "value": raw })
        }
        UserAgeValidationError::OutOfRange { value } => json!({
            "field": "age",
            "code": "out_of_range",
            "value": value,
            "min": USER_AGE_MIN,
            "max": USER_AGE_MAX,
        }),
    };
    Error::invalid_request(INVALID_AGE).with_details(details)
}

/// Create a user from path parameters.
///
/// The age segment is parsed here rather than by the router so that
/// non-numeric and negative ages get the same 400 as out-of-range ones.
#[utoipa::path(
    post,
    path = "/users/{name}/{age}",
    params(
        ("name" = String, Path, description = "User's name to add"),
        ("age" = i64, Path, description = "User's age to add, 0 to 120")
    ),
    responses(
        (status = 201, description = "User created successfully", body = MessageResponse),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/{name}/{age}")]
pub async fn create_user(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (name, age) = path.into_inner();
    let request = CreateUserRequest::try_from_parts(&name, &age).map_err(|err| {
        info!(name = %name, error = %err, "rejected user create");
        map_age_validation_error(&err)
    })?;
    state.roster.create_user(request).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(USER_CREATED)))
}

/// Delete every user with the given name.
#[utoipa::path(
    delete,
    path = "/users/{name}",
    params(("name" = String, Path, description = "User's name to delete")),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{name}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    match state.roster.delete_user(&name).await? {
        DeleteOutcome::Deleted(_) => Ok(web::Json(MessageResponse::new(USER_DELETED))),
        DeleteOutcome::NotFound => Err(Error::not_found(USER_NOT_FOUND)),
    }
}

/// List every user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "A list of users", body = [UserRecordSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    Ok(web::Json(state.roster_query.list_users().await?))
}

/// Add users from an uploaded CSV file.
///
/// The file needs `name` and `age` columns, matched case-insensitively. Either
/// every row is added or none is.
#[utoipa::path(
    post,
    path = "/users/csv",
    request_body(
        content_type = "multipart/form-data",
        description = "Form with a `file` part holding the CSV data"
    ),
    responses(
        (status = 201, description = "Users added successfully", body = MessageResponse),
        (status = 400, description = "Invalid file or data", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "importUsersCsv"
)]
#[post("/users/csv")]
pub async fn import_users_csv(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let upload = read_file_part(&req, payload, state.upload_limit).await?;
    let count = state.roster.import_users(&upload.contents).await?;
    info!(filename = %upload.filename, count, "csv upload imported");
    Ok(HttpResponse::Created().json(MessageResponse::new(USERS_ADDED)))
}

/// Average age grouped by the first character of each name.
#[utoipa::path(
    get,
    path = "/users/average_age",
    responses(
        (status = 200, description = "Average age per initial", body = AverageAgeResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "averageAgeByInitial"
)]
#[get("/users/average_age")]
pub async fn average_age(state: web::Data<HttpState>) -> ApiResult<web::Json<AverageAgeResponse>> {
    let summary = state.roster_query.average_age_by_initial().await?;
    Ok(web::Json(summary.into()))
}

#[cfg(test)]
mod tests;
