//! Assistant configuration feature slice.
//!
//! Owns `POST /api/ai-config` (validate and forward the assistant
//! instructions plus knowledge snippets) and `GET /api/ai-config` (a read
//! stub until a persistence layer exists).

pub mod routes;
mod validate;

pub use crate::validate::{AssistantConfigSubmission, ValidationError};

use aivo_domain::registry::{FeatureSlice, InitializedSlice};
use aivo_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Assistant feature state.
#[derive(Debug)]
pub struct Assistant;

impl FeatureSlice for Assistant {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the assistant feature.
pub fn init() -> InitializedSlice {
    tracing::info!("Assistant slice initialized");

    InitializedSlice::new("assistant", Assistant)
}

/// Routes owned by this slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(routes::save_config_handler, routes::current_config_handler))
}
