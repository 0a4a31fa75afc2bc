//! Tariff listing feature slice.
//!
//! Owns `GET /api/tariffs`. The pricing page must keep rendering even when
//! the backend is down, so transport failures degrade to the embedded
//! default tier table instead of surfacing an error.

mod fallback;
pub mod routes;

pub use crate::fallback::default_tariffs;

use aivo_domain::registry::{FeatureSlice, InitializedSlice};
use aivo_domain::tariff::TariffPlan;
use aivo_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Tariffs feature state: the fallback table served on backend outages.
#[derive(Debug)]
pub struct Tariffs {
    fallback: Vec<TariffPlan>,
}

impl Tariffs {
    #[must_use]
    pub fn fallback(&self) -> &[TariffPlan] {
        &self.fallback
    }
}

impl FeatureSlice for Tariffs {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the tariffs feature.
pub fn init() -> InitializedSlice {
    tracing::info!("Tariffs slice initialized");

    InitializedSlice::new("tariffs", Tariffs { fallback: default_tariffs() })
}

/// Routes owned by this slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(routes::list_tariffs_handler))
}
