pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::accounts::handlers as accounts;
use crate::applications::handlers as applications;
use crate::calculator;
use crate::errors::route_not_found;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

/// Router wrapped so `/api/jobs/` and `/api/jobs` reach the same handler.
pub type App = NormalizePath<Router>;

/// Trailing slashes are trimmed before routing, which a layer on the
/// router itself cannot do since it runs after the route is matched.
pub fn build_app(router: Router) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::info_handler).fallback(route_not_found))
        .route("/health", get(health::health_handler).fallback(route_not_found))
        // Job listings
        .route("/api/jobs", get(jobs::handle_list_jobs).fallback(route_not_found))
        .route("/api/jobs/:id", get(jobs::handle_get_job).fallback(route_not_found))
        .route(
            "/api/jobs/location/:city",
            get(jobs::handle_jobs_by_location).fallback(route_not_found),
        )
        // Applications
        .route(
            "/api/apply",
            post(applications::handle_apply).fallback(route_not_found),
        )
        // Accounts
        .route(
            "/api/register",
            post(accounts::handle_register).fallback(route_not_found),
        )
        .route("/api/login", post(accounts::handle_login).fallback(route_not_found))
        .route("/api/users", get(accounts::handle_list_users).fallback(route_not_found))
        // Calculator
        .route(
            "/api/calculator/:op",
            get(calculator::handle_calculate).fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state)
}
