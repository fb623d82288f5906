use crate::core::error::ApiError;
use crate::core::state::AppState;

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use mtendere_store::UserStore;
use mtendere_types::contracts::{CreateUserRequest, Page, PageQuery, UpdateUserRequest};
use mtendere_types::entities::{User, UserProfile};
use std::sync::Arc;
use uuid::Uuid;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<Page<UserProfile>> {
    let (users, total) = state.store.users.list(&query).await;
    Json(Page {
        items: users.iter().map(User::profile).collect(),
        total,
    })
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let password_hash = state.auth_manager.hash_password(&body.password);

    let user = User::new(
        body.email,
        body.username,
        body.first_name,
        body.last_name,
        password_hash,
        body.role.unwrap_or_default(),
    );

    let user = state.store.users.insert(user).await?;
    Ok(Json(user.profile()))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(mut body): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    // a supplied password is rehashed, never stored raw
    let password_hash = body
        .password
        .take()
        .map(|password| state.auth_manager.hash_password(&password));

    let user = state.store.users.update(id, body, password_hash).await?;
    Ok(Json(user.profile()))
}

/// Users are soft-deactivated rather than removed so entities that
/// reference them as creator stay resolvable.
pub async fn deactivate_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = state.store.users.deactivate(id).await?;
    Ok(Json(user.profile()))
}

pub fn users_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", put(update_user).delete(deactivate_user))
}

#[cfg(test)]
mod tests {
    use crate::core::test_utils::{admin_token, body_json, get_authed, json_request, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_create_user_response_has_no_hash() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/users",
                Some(&token),
                r#"{"email": "mod@mtendere.com", "password": "pw", "firstName": "Mo",
                     "lastName": "Derator", "username": "mod", "role": "moderator"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["role"], "moderator");
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/users",
                Some(&token),
                r#"{"email": "admin@mtendere.com", "password": "pw", "firstName": "A",
                     "lastName": "B", "username": "other"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_soft_deactivates() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/users",
                Some(&token),
                r#"{"email": "temp@mtendere.com", "password": "pw", "firstName": "T",
                     "lastName": "Emp", "username": "temp"}"#,
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                &format!("/api/admin/users/{}", id),
                Some(&token),
                "",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["isActive"], false);

        // still listed: the record survives as inactive
        let response = app
            .clone()
            .oneshot(get_authed("/api/admin/users?search=temp", &token))
            .await
            .unwrap();
        let page = body_json(response).await;
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["isActive"], false);
    }

    #[tokio::test]
    async fn test_update_rehashes_password() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/users",
                Some(&token),
                r#"{"email": "pw@mtendere.com", "password": "old-pw", "firstName": "P",
                     "lastName": "W", "username": "pw"}"#,
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/admin/users/{}", id),
                Some(&token),
                r#"{"password": "new-pw"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // old password no longer logs in, new one does
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                None,
                r#"{"email": "pw@mtendere.com", "password": "old-pw"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                None,
                r#"{"email": "pw@mtendere.com", "password": "new-pw"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
