//! Request admission shared by the JSON POST handlers.

use crate::server::error::ApiError;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;
use std::borrow::Cow;

pub const UNSUPPORTED_CONTENT_TYPE: &str = "Content-Type must be application/json";
pub const MALFORMED_JSON: &str = "Request body is not valid JSON";

/// Admits a request body as JSON.
///
/// The content type only has to *contain* `application/json` (case-insensitive),
/// so `application/json; charset=utf-8` passes. The body is decoded into a raw
/// [`Value`]; shape checks belong to the feature's own boundary parse.
///
/// # Errors
/// `BadRequest` with a content-type or JSON-format sentence.
pub fn parse_json_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, ApiError> {
    let content_type =
        headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()).unwrap_or_default();
    if !content_type.to_ascii_lowercase().contains("application/json") {
        return Err(ApiError::BadRequest(Cow::Borrowed(UNSUPPORTED_CONTENT_TYPE)));
    }

    serde_json::from_slice(body).map_err(|_| ApiError::BadRequest(Cow::Borrowed(MALFORMED_JSON)))
}
