use std::borrow::Cow;

/// Error types specific to the backend gateway.
///
/// `Transport` and `Decode` are deliberately separate variants even though
/// every caller today maps both to the same 503: the distinction matters in
/// the logs when the backend misbehaves.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway configuration error: {0}")]
    InvalidConfiguration(Cow<'static, str>),

    #[error("HTTP client construction failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Transport failure calling {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Non-JSON reply from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}
