use crate::core::state::{AppState, HasCollection};

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use mtendere_store::CollectionStore;
use mtendere_types::contracts::{Page, PageQuery};
use mtendere_types::entities::{
    BlogPost, Job, ManagedEntity, Partner, Scholarship, TeamMember, Testimonial,
};
use std::sync::Arc;

/// Unauthenticated read variant: only publicly visible records, no
/// mutation routes. The caller's `status` filter is ignored; visibility
/// comes from the entity's own flag.
pub async fn public_list<T>(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<Page<T>>
where
    T: ManagedEntity,
    AppState: HasCollection<T>,
{
    let collection = <AppState as HasCollection<T>>::collection(&state);
    let (items, total) = collection.list_public(&query).await;
    Json(Page { items, total })
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/scholarships", get(public_list::<Scholarship>))
        .route("/jobs", get(public_list::<Job>))
        .route("/testimonials", get(public_list::<Testimonial>))
        .route("/blog-posts", get(public_list::<BlogPost>))
        .route("/team-members", get(public_list::<TeamMember>))
        .route("/partners", get(public_list::<Partner>))
}

#[cfg(test)]
mod tests {
    use crate::core::test_utils::{admin_token, body_json, get, json_request, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_public_listing_never_exposes_drafts() {
        let (state, app) = test_app().await;
        let token = admin_token(&state).await;

        for i in 0..5 {
            let body = format!(
                r#"{{"title": "Draft {}", "description": "d", "eligibility": "e",
                     "category": "c", "institution": "i", "status": "draft"}}"#,
                i
            );
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/scholarships",
                    Some(&token),
                    &body,
                ))
                .await
                .unwrap();
        }
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/scholarships",
                Some(&token),
                r#"{"title": "Live", "description": "d", "eligibility": "e",
                     "category": "c", "institution": "i", "status": "published"}"#,
            ))
            .await
            .unwrap();

        // no auth header required
        let response = app.clone().oneshot(get("/api/scholarships")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_json(response).await;
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["title"], "Live");

        // a status override cannot resurface drafts
        let response = app
            .clone()
            .oneshot(get("/api/scholarships?status=draft"))
            .await
            .unwrap();
        let page = body_json(response).await;
        assert_eq!(page["total"], 1);
    }

    #[tokio::test]
    async fn test_public_variant_has_no_mutations() {
        let (_, app) = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/scholarships",
                None,
                r#"{"title": "x"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
