use crate::core::error::ApiError;
use crate::core::state::AppState;

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use mtendere_auth::permission::validate_permissions;
use mtendere_store::RoleStore;
use mtendere_types::contracts::{
    CreateRoleRequest, MessageResponse, Page, PageQuery, UpdateRoleRequest,
};
use mtendere_types::entities::Role;
use std::sync::Arc;
use uuid::Uuid;

pub async fn list_roles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<Page<Role>> {
    let (items, total) = state.store.roles.list(&query).await;
    Json(Page { items, total })
}

pub async fn create_role(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRoleRequest>,
) -> Result<Json<Role>, ApiError> {
    // permission strings must come from the fixed catalog
    validate_permissions(&body.permissions)?;

    let role = Role::new(body.name, body.description, body.permissions);
    let role = state.store.roles.insert(role).await?;
    Ok(Json(role))
}

pub async fn update_role(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<Role>, ApiError> {
    if let Some(permissions) = &body.permissions {
        validate_permissions(permissions)?;
    }

    let role = state.store.roles.update(id, body).await?;
    Ok(Json(role))
}

pub async fn delete_role(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.roles.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Role deleted successfully".to_string(),
    }))
}

pub fn roles_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/:id", put(update_role).delete(delete_role))
}

#[cfg(test)]
mod tests {
    use crate::core::test_utils::{admin_token, body_json, json_request, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_create_role_with_catalog_permissions() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/roles",
                Some(&token),
                r#"{"name": "content-editor", "description": "Blog and team pages",
                     "permissions": ["manage_blog", "manage_team"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["permissions"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_permission_rejected() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/roles",
                Some(&token),
                r#"{"name": "root", "description": "?", "permissions": ["manage_everything"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Unknown permission: manage_everything");
    }
}
