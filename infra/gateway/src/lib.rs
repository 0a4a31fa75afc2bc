//! # Backend Gateway
//!
//! The one outbound collaborator of this service: a thin JSON-over-HTTP
//! client for the upstream platform backend that performs the actual account
//! creation, assistant-config persistence, and tariff storage.
//!
//! The gateway never interprets business data. It returns the upstream's
//! status code together with a tolerant envelope ([`UpstreamEnvelope`]) and
//! leaves pass-through decisions to the feature slices. No retries are
//! attempted; a failed call surfaces immediately.
//!
//! ## Example
//! ```no_run
//! use aivo_gateway::Gateway;
//!
//! # async fn example() -> Result<(), aivo_gateway::GatewayError> {
//! let gateway = Gateway::builder().base_url("http://localhost:8000").build()?;
//! let reply = gateway.get_json("/api/tariffs").await?;
//! assert!(reply.is_success());
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::GatewayError;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// A fluent builder for configuring and constructing a [`Gateway`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct GatewayBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl GatewayBuilder {
    /// Sets the backend base URL, e.g. `http://localhost:8000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout in seconds.
    pub const fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Consumes the builder and constructs the gateway.
    ///
    /// # Errors
    /// Returns an error if no base URL was provided or the underlying HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<Gateway, GatewayError> {
        let base_url = self
            .base_url
            .ok_or(GatewayError::InvalidConfiguration(Cow::Borrowed("base URL not provided")))?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(GatewayError::InvalidConfiguration(Cow::Borrowed("base URL is empty")));
        }

        let timeout = self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        let client = Client::builder().timeout(timeout).build().map_err(GatewayError::Client)?;

        Ok(Gateway { client, base_url })
    }
}

/// Shared handle to the upstream backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    /// Returns a new [`GatewayBuilder`].
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::default()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs a JSON payload to `path`, optionally with a bearer credential.
    ///
    /// # Errors
    /// [`GatewayError::Transport`] if the request cannot be sent or times
    /// out; [`GatewayError::Decode`] if the reply body is not JSON.
    pub async fn post_json<T>(
        &self,
        path: &str,
        payload: &T,
        bearer: Option<&str>,
    ) -> Result<UpstreamReply, GatewayError>
    where
        T: serde::Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.post(&url).json(payload);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        Self::dispatch(request, url).await
    }

    /// GETs a JSON document from `path`.
    ///
    /// # Errors
    /// Same failure modes as [`Gateway::post_json`].
    pub async fn get_json(&self, path: &str) -> Result<UpstreamReply, GatewayError> {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.get(&url);

        Self::dispatch(request, url).await
    }

    async fn dispatch(request: RequestBuilder, url: String) -> Result<UpstreamReply, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|source| GatewayError::Transport { url: url.clone(), source })?;

        let status = response.status();
        let body = response
            .json::<UpstreamEnvelope>()
            .await
            .map_err(|source| GatewayError::Decode { url: url.clone(), source })?;

        debug!(%url, %status, success = body.success, "Backend reply");

        Ok(UpstreamReply { status, body })
    }
}

/// What the backend answered: its status code plus the decoded envelope.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: UpstreamEnvelope,
}

impl UpstreamReply {
    /// A reply counts as successful only when both the HTTP status and the
    /// envelope's own `success` flag agree.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success() && self.body.success
    }
}

/// The tolerant pass-through shape every backend endpoint answers with.
/// Unknown fields are ignored; absent fields default to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Field-level validation errors, e.g. `{"email": ["already taken"]}`.
    pub errors: Option<Map<String, Value>>,
    pub data: Option<Value>,
    pub token: Option<String>,
    pub user: Option<Value>,
}

impl UpstreamEnvelope {
    /// The human-readable rejection sentence: the backend's `error`, falling
    /// back to its `message`, falling back to the caller's default.
    #[must_use]
    pub fn error_message(&self, fallback: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_owned())
    }
}
