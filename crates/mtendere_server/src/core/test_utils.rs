use crate::core::router::create_router;
use crate::core::setup::build_state;
use crate::core::state::AppState;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use mtendere_settings::config::{generate_jwt_secret, MtendereConfig};
use mtendere_store::UserStore;
use std::sync::Arc;

pub async fn test_app() -> (Arc<AppState>, Router) {
    let config = MtendereConfig {
        jwt_secret: generate_jwt_secret(),
        admin_email: "admin@mtendere.com".to_string(),
        admin_username: "admin".to_string(),
        admin_password: "admin123".to_string(),
        ..Default::default()
    };

    let state = build_state(config).await.unwrap();
    let router = create_router(state.clone()).await;
    (state, router)
}

/// Token for the seeded bootstrap admin.
pub async fn admin_token(state: &AppState) -> String {
    let admin = state
        .store
        .users
        .find_by_email(&state.config.admin_email)
        .await
        .unwrap();
    state.auth_manager.generate_jwt(&admin).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_authed(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
