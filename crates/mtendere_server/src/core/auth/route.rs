use crate::core::error::ApiError;
use crate::core::state::AppState;

use axum::{extract::State, routing::post, Json, Router};
use mtendere_error::error::{AuthError, StoreError};
use mtendere_store::UserStore;
use mtendere_types::contracts::{AuthResponse, LoginRequest, RegisterRequest};
use mtendere_types::entities::User;
use mtendere_types::enums::UserRole;
use std::sync::Arc;
use tracing::{error, info};

pub async fn api_login_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    // unknown email and wrong password collapse to the same error so the
    // response never reveals which emails are registered
    let user = state
        .store
        .users
        .find_by_email(&body.email)
        .await
        .ok_or(AuthError::InvalidCredentials)?;

    state.auth_manager.validate_user(&user, &body.password)?;

    let token = state.auth_manager.generate_jwt(&user).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::server_error()
    })?;

    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}

pub async fn api_register_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let password_hash = state.auth_manager.hash_password(&body.password);

    let user = User::new(
        body.email,
        body.username,
        body.first_name,
        body.last_name,
        password_hash,
        UserRole::User,
    );

    // uniqueness is enforced inside the store's critical section
    let user = state.store.users.insert(user).await.map_err(|e| match e {
        StoreError::Duplicate(..) => AuthError::AlreadyExists.into(),
        e => ApiError::from(e),
    })?;

    info!("Registered user {}", user.username);

    let token = state.auth_manager.generate_jwt(&user).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::server_error()
    })?;

    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}

pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(api_login_handler))
        .route("/register", post(api_register_handler))
}
