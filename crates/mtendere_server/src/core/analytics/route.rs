use crate::core::auth::middleware::{require_admin, require_auth};
use crate::core::state::AppState;

use axum::{extract::State, middleware, routing::get, Json, Router};
use mtendere_store::{CollectionStore, UserStore};
use mtendere_types::contracts::{ActivityEvent, AnalyticsSummary, DashboardCounts};
use mtendere_utils::utils::get_utc_datetime;
use std::sync::Arc;

/// Per-collection counts for the dashboard cards.
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Json<DashboardCounts> {
    let store = &state.store;
    Json(DashboardCounts {
        users: store.users.count().await,
        scholarships: store.scholarships.count().await,
        jobs: store.jobs.count().await,
        applications: store.applications.count().await,
        partners: store.partners.count().await,
        testimonials: store.testimonials.count().await,
        blog_posts: store.blog_posts.count().await,
        team_members: store.team_members.count().await,
    })
}

pub async fn analytics_summary_handler(
    State(state): State<Arc<AppState>>,
) -> Json<AnalyticsSummary> {
    let store = &state.store;
    Json(AnalyticsSummary {
        total_users: store.users.count().await,
        total_applications: store.applications.count().await,
        total_scholarships: store.scholarships.count().await,
        total_jobs: store.jobs.count().await,
        total_testimonials: store.testimonials.count().await,
        total_blog_posts: store.blog_posts.count().await,
        total_team_members: store.team_members.count().await,
        total_partners: store.partners.count().await,
    })
}

/// Recent-activity feed. Static events for now; a real feed needs an
/// audit log the store does not keep yet.
pub async fn recent_activity_handler() -> Json<Vec<ActivityEvent>> {
    let now = get_utc_datetime();
    Json(vec![
        ActivityEvent {
            id: 1,
            event: "user_registration".to_string(),
            timestamp: now,
        },
        ActivityEvent {
            id: 2,
            event: "scholarship_created".to_string(),
            timestamp: now,
        },
        ActivityEvent {
            id: 3,
            event: "application_submitted".to_string(),
            timestamp: now,
        },
    ])
}

/// Admin-gated analytics routes mounted outside the /admin prefix.
pub fn analytics_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics", get(recent_activity_handler))
        .route("/analytics/summary", get(analytics_summary_handler))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state, require_auth))
}
