use aivo_gateway::GatewayError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use utoipa::ToSchema;

/// The message returned for any failure the handler did not anticipate.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";
/// The message returned when the upstream backend cannot be reached.
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Could not connect to the backend server";

/// Every failure an API handler can surface, one variant per status class.
///
/// Rendered as the uniform envelope `{"success": false, "error": "...",
/// "errors": {...}?}`. Upstream rejections relay the backend's status and
/// field-level `errors` payload unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(Cow<'static, str>),

    #[error("Authorization required")]
    Unauthorized,

    /// The backend answered with a non-success envelope; relay it verbatim.
    #[error("{error}")]
    Upstream { status: StatusCode, error: String, errors: Option<Map<String, Value>> },

    #[error("{0}")]
    Unavailable(Cow<'static, str>),

    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Upstream { status, .. } => *status,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Transport-level gateway failures all surface as 503; the caller never
/// learns whether it was DNS, a refused connection, or a garbled reply.
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        tracing::warn!(error = %err, "Backend gateway call failed");
        Self::Unavailable(BACKEND_UNREACHABLE_MESSAGE.into())
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    /// Field-level detail relayed from the backend, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<Map<String, Value>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let errors = match self {
            Self::Upstream { errors, .. } => errors,
            _ => None,
        };
        let body = ErrorBody { success: false, error, errors };

        (status, Json(body)).into_response()
    }
}
