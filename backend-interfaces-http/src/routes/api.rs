use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{catalog_handlers, donation_handlers, feedback_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/donate",
            post(donation_handlers::donate).fallback(donation_handlers::donate_method_not_allowed),
        )
        .route(
            "/api/feedback",
            post(feedback_handlers::submit_feedback)
                .fallback(feedback_handlers::feedback_method_not_allowed),
        )
        .route("/api/packages", get(catalog_handlers::list_packages))
        .route("/api/leaderboard", get(catalog_handlers::leaderboard))
        .route("/api/stats", get(catalog_handlers::server_stats))
        .route("/api/events", get(catalog_handlers::list_events))
        .route("/api/team", get(catalog_handlers::list_team))
        .route("/api/ops/console/give", post(ops_handlers::give_item))
        .route("/api/ops/console/broadcast", post(ops_handlers::broadcast))
        .route("/api/ops/console/check", get(ops_handlers::console_check))
        .route("/api/ops/health/live", get(ops_handlers::health_live))
        .route("/api/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/api/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
