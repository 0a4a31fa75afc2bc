//! Facade crate for `Aivo` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.
//! - Merge [`server::router::api_router`] into the application router.

pub use aivo_domain as domain;
pub use aivo_kernel as kernel;

use aivo_domain::registry::InitializedSlice;
use aivo_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;

pub mod server {
    pub mod router {
        pub use aivo_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use aivo_accounts as accounts;
    pub use aivo_assistant as assistant;
    pub use aivo_tariffs as tariffs;

    /// Enabled features.
    pub const ENABLED: &[&str] = &["accounts", "assistant", "tariffs"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
#[must_use]
pub fn init() -> Vec<InitializedSlice> {
    vec![
        // Accounts
        features::accounts::init(),
        // Assistant configuration
        features::assistant::init(),
        // Tariffs
        features::tariffs::init(),
    ]
}

/// The combined feature router (everything except the system endpoints).
#[must_use]
pub fn api_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .merge(features::accounts::router())
        .merge(features::assistant::router())
        .merge(features::tariffs::router())
}
