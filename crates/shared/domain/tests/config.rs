use aivo_domain::config::{ApiConfig, BackendConfig, CookieConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4100);
    assert!(server.ssl.is_none());

    let backend = BackendConfig::default();
    assert_eq!(backend.base_url, "http://localhost:8000");
    assert_eq!(backend.timeout_seconds, 30);
    assert_eq!(backend.endpoints.register, "/api/register");
    assert_eq!(backend.endpoints.ai_config, "/api/ai-config");
    assert_eq!(backend.endpoints.tariffs, "/api/tariffs");

    let cookie = CookieConfig::default();
    assert!(!cookie.secure);
    assert_eq!(cookie.max_age_seconds, 86_400);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "backend": {
            "base_url": "https://backend.internal",
            "timeout_seconds": 5,
            "endpoints": { "register": "/v2/register" }
        },
        "security": { "cookie": { "secure": true } }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.backend.base_url, "https://backend.internal");
    assert_eq!(cfg.backend.timeout_seconds, 5);
    assert_eq!(cfg.backend.endpoints.register, "/v2/register");
    // Sections keep their defaults for fields the file omits.
    assert_eq!(cfg.backend.endpoints.tariffs, "/api/tariffs");
    assert!(cfg.security.cookie.secure);
    assert_eq!(cfg.security.cookie.max_age_seconds, 86_400);
}

#[test]
fn empty_config_is_a_valid_development_setup() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 4100);
    assert_eq!(cfg.backend.base_url, "http://localhost:8000");
    assert!(!cfg.security.cookie.secure);
}
