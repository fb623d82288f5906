use crate::core::auth::schema::AuthenticatedUser;
use crate::core::error::ApiError;
use crate::core::state::{AppState, HasCollection};

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Extension, Json, Router,
};
use mtendere_store::CollectionStore;
use mtendere_types::contracts::{MessageResponse, Page, PageQuery};
use mtendere_types::entities::ManagedEntity;
use std::sync::Arc;
use uuid::Uuid;

/// Admin router for one managed-entity kind. Every kind gets the same
/// four operations; the entity impl supplies the payloads and filters.
pub fn resource_router<T>(path: &str) -> Router<Arc<AppState>>
where
    T: ManagedEntity,
    AppState: HasCollection<T>,
{
    Router::new()
        .route(
            &format!("/{}", path),
            get(list_resources::<T>).post(create_resource::<T>),
        )
        .route(
            &format!("/{}/:id", path),
            put(update_resource::<T>).delete(delete_resource::<T>),
        )
}

pub async fn list_resources<T>(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<Page<T>>
where
    T: ManagedEntity,
    AppState: HasCollection<T>,
{
    let collection = <AppState as HasCollection<T>>::collection(&state);
    let (items, total) = collection.list(&query).await;
    Json(Page { items, total })
}

pub async fn create_resource<T>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(payload): Json<T::Create>,
) -> Json<T>
where
    T: ManagedEntity,
    AppState: HasCollection<T>,
{
    let collection = <AppState as HasCollection<T>>::collection(&state);
    let record = collection.create(payload, Some(user.id)).await;
    Json(record)
}

pub async fn update_resource<T>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<T::Patch>,
) -> Result<Json<T>, ApiError>
where
    T: ManagedEntity,
    AppState: HasCollection<T>,
{
    let collection = <AppState as HasCollection<T>>::collection(&state);
    let record = collection.update(id, patch).await?;
    Ok(Json(record))
}

pub async fn delete_resource<T>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError>
where
    T: ManagedEntity,
    AppState: HasCollection<T>,
{
    let collection = <AppState as HasCollection<T>>::collection(&state);
    collection.delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully", T::KIND),
    }))
}

#[cfg(test)]
mod tests {
    use crate::core::test_utils::{admin_token, body_json, get_authed, json_request, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    const SCHOLARSHIP_BODY: &str = r#"{
        "title": "STEM Women Fellowship",
        "description": "Full ride",
        "eligibility": "Female undergraduates",
        "amount": "5000",
        "category": "STEM",
        "institution": "University of Malawi",
        "status": "draft"
    }"#;

    #[tokio::test]
    async fn test_crud_roundtrip() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        // create stamps id, creator and timestamps
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/scholarships",
                Some(&token),
                SCHOLARSHIP_BODY,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(created["createdBy"].as_str().is_some());

        // list contains it exactly once
        let response = app
            .clone()
            .oneshot(get_authed("/api/admin/scholarships", &token))
            .await
            .unwrap();
        let page = body_json(response).await;
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["id"].as_str().unwrap(), id);

        // partial update changes only the patched field
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/admin/scholarships/{}", id),
                Some(&token),
                r#"{"status": "published"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["status"], "published");
        assert_eq!(updated["title"], created["title"]);
        assert_eq!(updated["createdAt"], created["createdAt"]);
        assert!(
            updated["updatedAt"].as_str().unwrap() > created["updatedAt"].as_str().unwrap()
        );

        // delete, then both repeat mutations are 404
        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                &format!("/api/admin/scholarships/{}", id),
                Some(&token),
                "",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/admin/scholarships/{}", id),
                Some(&token),
                r#"{"status": "draft"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                &format!("/api/admin/scholarships/{}", id),
                Some(&token),
                "",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_pagination_over_http() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        for i in 0..15 {
            let body = format!(
                r#"{{"title": "Job {}", "company": "Acme", "location": "Lilongwe",
                     "jobType": "full-time", "description": "d"}}"#,
                i
            );
            let response = app
                .clone()
                .oneshot(json_request("POST", "/api/admin/jobs", Some(&token), &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(get_authed("/api/admin/jobs?page=2&limit=10", &token))
            .await
            .unwrap();
        let page = body_json(response).await;
        assert_eq!(page["items"].as_array().unwrap().len(), 5);
        assert_eq!(page["total"], 15);

        let response = app
            .clone()
            .oneshot(get_authed("/api/admin/jobs?page=99&limit=10", &token))
            .await
            .unwrap();
        let page = body_json(response).await;
        assert_eq!(page["items"].as_array().unwrap().len(), 0);
        assert_eq!(page["total"], 15);
    }
}
