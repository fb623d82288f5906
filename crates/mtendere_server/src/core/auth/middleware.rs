use crate::core::auth::schema::AuthenticatedUser;
use crate::core::error::ApiError;
use crate::core::state::AppState;

use axum::http::header;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use mtendere_error::error::AuthError;
use std::sync::Arc;

/// Authentication check: a bearer token must be present and verify. The
/// missing, malformed and expired cases are all 401 -- only a role
/// failure downstream is a 403.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let access_token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(|token| token.to_owned());

    let access_token = access_token.ok_or(AuthError::MissingToken)?;

    // validates the signature and the embedded expiry
    let claims = state.auth_manager.validate_jwt(&access_token)?;

    req.extensions_mut().insert(AuthenticatedUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Authorization check, layered inside `require_auth` on admin routes.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or(AuthError::MissingToken)?;

    if !user.role.is_admin() {
        return Err(AuthError::PermissionDenied.into());
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use crate::core::test_utils::{body_json, get, get_authed, json_request, test_app};
    use axum::http::StatusCode;
    use mtendere_auth::auth::AuthManager;
    use mtendere_store::UserStore;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let (_, app) = test_app().await;

        let response = app.oneshot(get("/api/admin/scholarships")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(get_authed("/api/admin/scholarships", "not.a.token"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_from_wrong_secret_is_unauthorized() {
        let (state, app) = test_app().await;

        let admin = state
            .store
            .users
            .find_by_email(&state.config.admin_email)
            .await
            .unwrap();
        let forged = AuthManager::new("some-other-secret", 24)
            .generate_jwt(&admin)
            .unwrap();

        let response = app
            .oneshot(get_authed("/api/admin/scholarships", &forged))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_admin_token_is_forbidden() {
        let (_, app) = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/register",
                None,
                r#"{"email": "user@mtendere.com", "password": "pw", "firstName": "U", "lastName": "Ser", "username": "plain"}"#,
            ))
            .await
            .unwrap();
        let token = body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(get_authed("/api/admin/scholarships", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_token_passes_both_gates() {
        let (state, app) = test_app().await;
        let token = crate::core::test_utils::admin_token(&state).await;

        let response = app
            .oneshot(get_authed("/api/admin/scholarships", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
