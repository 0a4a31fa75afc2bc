use aivo_domain::config::ApiConfig;
use aivo_kernel::gateway::Gateway;
use aivo_kernel::prelude::ApiState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(base_url: &str) -> Router {
    let mut config = ApiConfig::default();
    config.backend.base_url = base_url.to_owned();

    let gateway = Gateway::builder().base_url(base_url).timeout_seconds(2).build().expect("gateway");
    let state = ApiState::builder()
        .config(config)
        .gateway(gateway)
        .register_slice(aivo_accounts::init())
        .build()
        .expect("state");

    let (router, _api) = aivo_accounts::router().split_for_parts();
    router.with_state(state)
}

fn valid_submission() -> Value {
    json!({
        "name": "John Doe",
        "email": "JOHN@EXAMPLE.COM",
        "company_name": "Acme Corp",
        "password": "password123",
        "tariff_plan_id": 1
    })
}

async fn post(router: Router, content_type: &str, body: String) -> (StatusCode, Value, Option<String>) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .expect("request");

    let response = router.oneshot(request).await.expect("response");
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .map(|value| value.to_str().expect("cookie header").to_owned());
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json body");

    (status, body, cookie)
}

#[tokio::test]
async fn round_trip_normalizes_and_sets_the_session_cookie() {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            // The backend must see the normalized payload: lowercased email,
            // a password_confirmation mirror, and no client-side fields.
            when.method(POST).path("/api/register").json_body(json!({
                "name": "John Doe",
                "email": "john@example.com",
                "company_name": "Acme Corp",
                "password": "password123",
                "password_confirmation": "password123",
                "tariff_plan_id": 1
            }));
            then.status(200).json_body(json!({
                "success": true,
                "message": "Welcome aboard",
                "token": "tok-42",
                "user": { "id": "u1", "name": "John Doe", "email": "john@example.com" }
            }));
        })
        .await;

    let (status, body, cookie) =
        post(app(&server.base_url()), "application/json", valid_submission().to_string()).await;

    upstream.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Welcome aboard");
    assert_eq!(body["token"], "tok-42");
    assert_eq!(body["user"]["id"], "u1");

    let cookie = cookie.expect("session cookie");
    assert!(cookie.starts_with("auth-token=tok-42;"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"), "secure only for TLS deployments");
}

#[tokio::test]
async fn success_without_a_token_sets_no_cookie() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/register");
            then.status(200).json_body(json!({ "success": true, "user": { "id": "u2" } }));
        })
        .await;

    let (status, body, cookie) =
        post(app(&server.base_url()), "application/json", valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], aivo_accounts::routes::REGISTRATION_SUCCESS);
    assert!(body.get("token").is_none());
    assert!(cookie.is_none());
}

#[tokio::test]
async fn upstream_rejections_pass_through_status_and_field_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/register");
            then.status(422).json_body(json!({
                "success": false,
                "error": "The email has already been taken",
                "errors": { "email": ["The email has already been taken"] }
            }));
        })
        .await;

    let (status, body, cookie) =
        post(app(&server.base_url()), "application/json", valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "The email has already been taken");
    assert_eq!(body["errors"]["email"][0], "The email has already been taken");
    assert!(cookie.is_none());
}

#[tokio::test]
async fn unreachable_backend_is_a_503() {
    // Nothing listens here.
    let (status, body, _) =
        post(app("http://127.0.0.1:9"), "application/json", valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().expect("error sentence").contains("backend"));
}

#[tokio::test]
async fn wrong_content_type_is_rejected_before_anything_else() {
    let (status, body, _) =
        post(app("http://127.0.0.1:9"), "text/plain", valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Content-Type must be application/json");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (status, body, _) =
        post(app("http://127.0.0.1:9"), "application/json", "{not json".to_owned()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Request body is not valid JSON");
}

#[tokio::test]
async fn validation_failures_never_reach_the_backend() {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/register");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let mut body = valid_submission();
    body["tariff_plan_id"] = json!(7);
    let (status, reply, _) = post(app(&server.base_url()), "application/json", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["error"], "A tariff plan must be selected");
    assert_eq!(upstream.hits_async().await, 0);
}
