use crate::validate::AssistantConfigSubmission;
use aivo_domain::constants::ASSISTANT_TAG;
use aivo_kernel::prelude::{ApiError, ApiResult, ApiState, AuthToken};
use aivo_kernel::server::body::parse_json_body;
use aivo_kernel::server::error::ErrorBody;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const SAVE_SUCCESS: &str = "Assistant settings saved successfully";
pub const SAVE_FAILED: &str = "Failed to save assistant settings";

/// Assistant configuration submission
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveConfigRequest {
    /// Owning company, string or numeric id
    #[schema(value_type = Option<Object>)]
    pub company_id: Option<Value>,
    /// Instruction text for the assistant (30-1500 characters)
    pub ai_context: String,
    /// Knowledge snippets, up to 20 entries of 10-1000 characters
    pub embeddings: Vec<String>,
}

/// Save outcome
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveConfigResponse {
    pub success: bool,
    pub message: String,
}

/// The stored assistant configuration, as reported to the console.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssistantConfigView {
    pub company_description: String,
    pub ai_context: String,
    pub embeddings: Vec<String>,
    pub is_configured: bool,
}

/// Read outcome
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentConfigResponse {
    pub success: bool,
    pub data: AssistantConfigView,
}

#[utoipa::path(
    post,
    path = "/api/ai-config",
    request_body = SaveConfigRequest,
    responses(
        (status = OK, description = "Configuration saved", body = SaveConfigResponse),
        (status = BAD_REQUEST, description = "Submission failed validation", body = ErrorBody),
        (status = UNAUTHORIZED, description = "Missing credential", body = ErrorBody),
        (status = SERVICE_UNAVAILABLE, description = "Backend unreachable", body = ErrorBody),
    ),
    tag = ASSISTANT_TAG,
)]
pub(crate) async fn save_config_handler(
    State(state): State<ApiState>,
    auth: AuthToken,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SaveConfigResponse>> {
    let raw = parse_json_body(&headers, &body)?;
    let submission = AssistantConfigSubmission::parse(&raw).map_err(|err| {
        tracing::debug!(error = %err, "Assistant config rejected at the boundary");
        ApiError::BadRequest(err.to_string().into())
    })?;

    let reply = state
        .gateway
        .post_json(
            &state.config.backend.endpoints.ai_config,
            &submission.payload(),
            Some(auth.as_str()),
        )
        .await?;

    if !reply.is_success() {
        return Err(ApiError::Upstream {
            status: reply.status,
            error: reply.body.error_message(SAVE_FAILED),
            errors: reply.body.errors,
        });
    }

    Ok(Json(SaveConfigResponse {
        success: true,
        message: reply.body.message.unwrap_or_else(|| SAVE_SUCCESS.to_owned()),
    }))
}

#[utoipa::path(
    get,
    path = "/api/ai-config",
    responses(
        (status = OK, description = "Current configuration", body = CurrentConfigResponse),
        (status = UNAUTHORIZED, description = "Missing credential", body = ErrorBody),
    ),
    tag = ASSISTANT_TAG,
)]
pub(crate) async fn current_config_handler(
    _auth: AuthToken,
) -> ApiResult<Json<CurrentConfigResponse>> {
    // No backing store is wired up for reads yet, so every caller sees an
    // unconfigured assistant regardless of prior saves.
    Ok(Json(CurrentConfigResponse {
        success: true,
        data: AssistantConfigView {
            company_description: String::new(),
            ai_context: String::new(),
            embeddings: Vec::new(),
            is_configured: false,
        },
    }))
}
