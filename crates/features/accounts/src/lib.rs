//! Account registration feature slice.
//!
//! Owns the `POST /api/register` operation: boundary validation of the
//! submitted account data, normalization, forwarding to the platform
//! backend, and session-cookie issuance on success.

pub mod routes;
mod validate;

pub use crate::validate::{RegistrationSubmission, ValidationError};

use aivo_domain::registry::{FeatureSlice, InitializedSlice};
use aivo_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Accounts feature state.
#[derive(Debug)]
pub struct Accounts;

impl FeatureSlice for Accounts {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the accounts feature.
pub fn init() -> InitializedSlice {
    tracing::info!("Accounts slice initialized");

    InitializedSlice::new("accounts", Accounts)
}

/// Routes owned by this slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(routes::register_handler))
}
