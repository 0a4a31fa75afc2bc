//! Hand-rolled cookie plumbing for the single session cookie this API issues.

use aivo_domain::config::CookieConfig;
use aivo_domain::constants::AUTH_COOKIE;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Formats the `Set-Cookie` value for a freshly issued auth token.
///
/// Attributes follow the registration contract: HTTP-only, `SameSite=Lax`,
/// path `/`, bounded lifetime, `Secure` when the deployment sits behind TLS.
#[must_use]
pub fn auth_cookie(token: &str, cfg: &CookieConfig) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE}={token}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
        cfg.max_age_seconds
    );
    if cfg.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Extracts a cookie value by name from the request headers.
///
/// Multiple `Cookie` headers are honored; the first match wins.
#[must_use]
pub fn cookie_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn auth_cookie_carries_the_required_attributes() {
        let cfg = CookieConfig::default();
        let cookie = auth_cookie("tok-123", &cfg);
        assert_eq!(cookie, "auth-token=tok-123; Max-Age=86400; Path=/; HttpOnly; SameSite=Lax");
    }

    #[test]
    fn secure_attribute_is_config_driven() {
        let cfg = CookieConfig { secure: true, max_age_seconds: 60 };
        let cookie = auth_cookie("tok", &cfg);
        assert!(cookie.ends_with("; Secure"));
        assert!(cookie.contains("Max-Age=60"));
    }

    #[test]
    fn cookie_value_finds_the_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; auth-token=abc; lang=uz"));
        assert_eq!(cookie_value(&headers, AUTH_COOKIE), Some("abc"));
        assert_eq!(cookie_value(&headers, "theme"), Some("dark"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_lookalike_names() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("xauth-token=evil"));
        assert_eq!(cookie_value(&headers, AUTH_COOKIE), None);
    }
}
