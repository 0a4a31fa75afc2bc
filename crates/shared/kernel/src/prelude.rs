//! Ergonomic re-exports for handler and router code.

pub use crate::server::auth::AuthToken;
pub use crate::server::error::{ApiError, ApiResult};
pub use crate::server::state::ApiState;
