//! Test helpers for inbound HTTP components.

/// Boundary used by [`multipart_body`].
pub const TEST_BOUNDARY: &str = "roster-test-boundary";

/// Build a `multipart/form-data` body with a single part.
///
/// Returns the `Content-Type` header value and the encoded body. Pass
/// `filename: None` to send a plain form field instead of a file.
pub fn multipart_body(field: &str, filename: Option<&str>, contents: &[u8]) -> (String, Vec<u8>) {
    let disposition = match filename {
        Some(filename) => format!("form-data; name=\"{field}\"; filename=\"{filename}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{TEST_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: text/csv\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{TEST_BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={TEST_BOUNDARY}"), body)
}
