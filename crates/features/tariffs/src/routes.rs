use crate::Tariffs;
use aivo_domain::constants::TARIFFS_TAG;
use aivo_domain::tariff::TariffPlan;
use aivo_kernel::prelude::{ApiError, ApiResult, ApiState};
use aivo_kernel::server::error::ErrorBody;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub const TARIFFS_FAILED: &str = "Failed to fetch tariff plans";

/// Tariff listing
#[derive(Debug, Serialize, ToSchema)]
pub struct TariffsResponse {
    pub success: bool,
    /// The available tiers
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<TariffPlan>>)]
    pub data: Option<Value>,
}

#[utoipa::path(
    get,
    path = "/api/tariffs",
    responses(
        (status = OK, description = "Available tiers (live or fallback)", body = TariffsResponse),
        (status = BAD_GATEWAY, description = "Backend rejected the listing", body = ErrorBody),
    ),
    tag = TARIFFS_TAG,
)]
pub(crate) async fn list_tariffs_handler(
    State(state): State<ApiState>,
) -> ApiResult<Json<TariffsResponse>> {
    match state.gateway.get_json(&state.config.backend.endpoints.tariffs).await {
        Ok(reply) if reply.is_success() => {
            Ok(Json(TariffsResponse { success: true, data: reply.body.data }))
        }
        Ok(reply) => Err(ApiError::Upstream {
            status: reply.status,
            error: reply.body.error_message(TARIFFS_FAILED),
            errors: reply.body.errors,
        }),
        Err(err) => {
            // Degrade gracefully: the pricing page renders the embedded
            // defaults rather than an error.
            tracing::warn!(error = %err, "Tariff listing unavailable, serving the fallback table");
            let tariffs = state.try_get_slice::<Tariffs>().map_err(|_| ApiError::Internal)?;
            let data = serde_json::to_value(tariffs.fallback()).map_err(|_| ApiError::Internal)?;
            Ok(Json(TariffsResponse { success: true, data: Some(data) }))
        }
    }
}
