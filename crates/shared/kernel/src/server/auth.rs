//! Explicit auth context for protected handlers.
//!
//! The credential is opaque to this service: it is whatever the backend
//! issued at registration or login. Handlers receive it as a value instead
//! of reading ambient request state, so they stay pure functions of
//! `(state, auth, headers, body)`.

use crate::server::cookies::cookie_value;
use crate::server::error::ApiError;
use aivo_domain::constants::AUTH_COOKIE;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The caller-supplied auth credential, resolved from the session cookie or
/// an `Authorization: Bearer` header (the console sends either, depending on
/// whether the call crosses the browser boundary).
#[derive(Debug, Clone)]
pub struct AuthToken(pub String);

impl AuthToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(token) = cookie_value(&parts.headers, AUTH_COOKIE) {
            if !token.is_empty() {
                return Ok(Self(token.to_owned()));
            }
        }

        bearer_token(parts).map(|token| Self(token.to_owned())).ok_or(ApiError::Unauthorized)
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    (!token.is_empty()).then_some(token)
}
