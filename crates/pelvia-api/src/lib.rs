//! pelvia-api
//!
//! HTTP surface over the scoring and rule engine. Stateless: every request
//! carries everything needed to answer it.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let origin = match &state.config.allowed_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/score",
            post(routes::instruments::score_answers),
        )
        // Rule engine
        .route("/clusters", get(routes::analysis::list_clusters))
        .route("/symptoms", get(routes::analysis::list_symptoms))
        .route("/analysis", post(routes::analysis::run_analysis))
        // Reports
        .route("/reports/summary", post(routes::reports::render_summary_report))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
