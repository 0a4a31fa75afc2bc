//! Shared names used across the API surface.

/// OpenAPI tag for system endpoints (health, docs).
pub const SYSTEM_TAG: &str = "system";
/// OpenAPI tag for account registration endpoints.
pub const ACCOUNTS_TAG: &str = "accounts";
/// OpenAPI tag for assistant configuration endpoints.
pub const ASSISTANT_TAG: &str = "assistant";
/// OpenAPI tag for tariff listing endpoints.
pub const TARIFFS_TAG: &str = "tariffs";

/// Name of the HTTP-only session cookie issued on registration.
pub const AUTH_COOKIE: &str = "auth-token";
