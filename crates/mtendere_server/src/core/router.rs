use crate::core::analytics::route::{analytics_router, dashboard_handler};
use crate::core::auth::middleware::{require_admin, require_auth};
use crate::core::auth::route::auth_router;
use crate::core::health::route::health_check;
use crate::core::public::route::public_router;
use crate::core::resources::route::resource_router;
use crate::core::roles::route::roles_router;
use crate::core::state::AppState;
use crate::core::users::route::users_router;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::{middleware, routing::get, Router};
use mtendere_types::entities::{
    Application, BlogPost, Job, Partner, Scholarship, TeamMember, Testimonial,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const ROUTE_PREFIX: &str = "/api";

/// Everything under /api/admin: the generic resource registries plus the
/// bespoke users/roles handlers and the dashboard counters. The whole
/// subtree sits behind authenticate-then-authorize.
fn admin_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(resource_router::<Scholarship>("scholarships"))
        .merge(resource_router::<Job>("jobs"))
        .merge(resource_router::<Application>("applications"))
        .merge(resource_router::<Partner>("partners"))
        .merge(resource_router::<Testimonial>("testimonials"))
        .merge(resource_router::<BlogPost>("blog"))
        .merge(resource_router::<TeamMember>("team"))
        .merge(users_router())
        .merge(roles_router())
        .route("/dashboard", get(dashboard_handler))
        // last layer added runs first: authenticate, then authorize
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(app_state, require_auth))
}

pub async fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::DELETE,
            Method::POST,
            Method::PATCH,
        ])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let api = Router::new()
        .nest("/auth", auth_router())
        .nest("/admin", admin_router(app_state.clone()))
        .merge(analytics_router(app_state.clone()))
        .merge(public_router());

    Router::new()
        .route("/healthcheck", get(health_check))
        .nest(ROUTE_PREFIX, api)
        .with_state(app_state)
        .layer(cors)
}
