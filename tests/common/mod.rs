use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use mindspace_api::config::cors::CorsConfig;
use mindspace_api::config::jwt::JwtConfig;
use mindspace_api::router::init_router;
use mindspace_api::state::AppState;
use mindspace_api::store::memory::InMemoryUserStore;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604_800,
    }
}

pub fn test_state() -> AppState {
    AppState {
        user_store: Arc::new(InMemoryUserStore::new()),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:8080".to_string()],
        },
    }
}

/// Fresh app over an empty in-memory store. Clone the router per request;
/// the store is shared behind the state.
pub fn test_app() -> Router {
    init_router(test_state())
}

pub async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

#[allow(dead_code)]
pub async fn get_with_token(
    app: &Router,
    path: &str,
    token: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

#[allow(dead_code)]
pub async fn put_json_with_token(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

#[allow(dead_code)]
pub async fn delete_with_token(
    app: &Router,
    path: &str,
    token: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Registers a user and returns `(user_id, access_token, refresh_token)`.
#[allow(dead_code)]
pub async fn register_user(
    app: &Router,
    user_name: &str,
    password: &str,
    role: &str,
) -> (String, String, String) {
    let (status, body) = post_json(
        app,
        "/api/users/register",
        serde_json::json!({
            "userName": user_name,
            "fullName": format!("{user_name} Test"),
            "email": format!("{user_name}@test.com"),
            "password": password,
            "role": role,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");

    let user_id = body["data"]["user"]["id"].as_str().unwrap().to_string();
    let access = body["data"]["tokens"]["accessToken"]
        .as_str()
        .unwrap()
        .to_string();
    let refresh = body["data"]["tokens"]["refreshToken"]
        .as_str()
        .unwrap()
        .to_string();
    (user_id, access, refresh)
}
