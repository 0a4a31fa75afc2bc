use crate::validate::RegistrationSubmission;
use aivo_domain::constants::ACCOUNTS_TAG;
use aivo_kernel::prelude::{ApiError, ApiResult, ApiState};
use aivo_kernel::server::body::parse_json_body;
use aivo_kernel::server::cookies::auth_cookie;
use aivo_kernel::server::error::ErrorBody;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const REGISTRATION_SUCCESS: &str = "Registration completed successfully";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// New-account submission
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Full name (Latin or Cyrillic letters)
    pub name: String,
    /// Email address
    pub email: String,
    /// Company name
    pub company_name: String,
    /// Password (6-128 characters)
    pub password: String,
    /// Selected pricing tier, 1-3
    pub tariff_plan_id: i64,
}

/// Registration outcome
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    /// The created account, as the backend reported it
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub user: Option<Value>,
    /// Session token, echoed for client-side storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = OK, description = "Account created", body = RegisterResponse),
        (status = BAD_REQUEST, description = "Submission failed validation", body = ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Backend unreachable", body = ErrorBody),
    ),
    tag = ACCOUNTS_TAG,
)]
pub(crate) async fn register_handler(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let raw = parse_json_body(&headers, &body)?;
    let submission = RegistrationSubmission::parse(&raw).map_err(|err| {
        tracing::debug!(error = %err, "Registration rejected at the boundary");
        ApiError::BadRequest(err.to_string().into())
    })?;

    let reply = state
        .gateway
        .post_json(&state.config.backend.endpoints.register, &submission.payload(), None)
        .await?;

    if !reply.is_success() {
        return Err(ApiError::Upstream {
            status: reply.status,
            error: reply.body.error_message(REGISTRATION_FAILED),
            errors: reply.body.errors,
        });
    }

    let token = reply.body.token;
    let response_body = RegisterResponse {
        success: true,
        message: reply.body.message.unwrap_or_else(|| REGISTRATION_SUCCESS.to_owned()),
        user: reply.body.user,
        token: token.clone(),
    };

    let mut response = (StatusCode::OK, Json(response_body)).into_response();
    if let Some(token) = token {
        let cookie = auth_cookie(&token, &state.config.security.cookie);
        let value = HeaderValue::from_str(&cookie).map_err(|_| ApiError::Internal)?;
        response.headers_mut().insert(SET_COOKIE, value);
    }

    Ok(response)
}
