//! Multipart file extraction for the CSV import endpoint.
//!
//! The upload must arrive as `multipart/form-data` with the file under the
//! `file` form field. A request without that part is rejected as "No file
//! part"; a part whose filename is empty (a form submitted without choosing a
//! file) is "No selected file".

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{HttpRequest, http::header, web};
use futures_util::TryStreamExt;
use serde_json::json;

use crate::domain::Error;

/// Form field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";
pub(crate) const NO_FILE_PART: &str = "No file part";
pub(crate) const NO_SELECTED_FILE: &str = "No selected file";

/// File contents pulled out of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied file name; never empty.
    pub filename: String,
    /// Raw bytes of the part body.
    pub contents: Vec<u8>,
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

fn map_multipart_error(err: MultipartError) -> Error {
    Error::invalid_request(format!("Invalid data: {err}"))
        .with_details(json!({ "code": "malformed_upload" }))
}

fn upload_too_large(limit: usize) -> Error {
    Error::invalid_request(format!("Invalid data: upload exceeds {limit} bytes"))
        .with_details(json!({ "code": "upload_too_large", "limit": limit }))
}

/// Read the `file` part of a multipart request, buffering at most `limit`
/// bytes.
///
/// # Errors
/// Returns an invalid-request [`Error`] when the request is not multipart,
/// has no `file` part, names no file, exceeds `limit`, or is malformed.
pub async fn read_file_part(
    req: &HttpRequest,
    payload: web::Payload,
    limit: usize,
) -> Result<UploadedFile, Error> {
    if !is_multipart(req) {
        return Err(Error::invalid_request(NO_FILE_PART));
    }

    let mut multipart = Multipart::new(req.headers(), payload);
    while let Some(mut field) = multipart.try_next().await.map_err(map_multipart_error)? {
        let filename = (field.name() == Some(FILE_FIELD))
            .then(|| {
                field
                    .content_disposition()
                    .and_then(|disposition| disposition.get_filename())
                    .map(str::to_owned)
            })
            .flatten();

        match filename {
            Some(filename) if filename.is_empty() => {
                return Err(Error::invalid_request(NO_SELECTED_FILE));
            }
            Some(filename) => {
                let contents = read_field(&mut field, limit).await?;
                return Ok(UploadedFile { filename, contents });
            }
            None => drain_field(&mut field).await?,
        }
    }

    Err(Error::invalid_request(NO_FILE_PART))
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, Error> {
    let mut contents = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(map_multipart_error)? {
        if contents.len() + chunk.len() > limit {
            return Err(upload_too_large(limit));
        }
        contents.extend_from_slice(&chunk);
    }
    Ok(contents)
}

async fn drain_field(field: &mut Field) -> Result<(), Error> {
    while field.try_next().await.map_err(map_multipart_error)?.is_some() {}
    Ok(())
}
