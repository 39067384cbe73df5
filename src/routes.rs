// src/routes.rs

use axum::{
    Router,
    http::{HeaderName, Method},
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{quiz, schedule, scores},
    state::AppState,
    utils::session::{SESSION_HEADER, session_middleware},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (scores, quiz, schedule).
/// * Applies global middleware (Trace, CORS) and the session middleware on
///   the session-scoped routes.
/// * Injects global state (session store, static content, config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let session_header = HeaderName::from_static(SESSION_HEADER);

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE, session_header.clone()])
        .expose_headers([session_header]);

    let score_routes = Router::new()
        .route("/", post(scores::submit_score).get(scores::list_scores))
        .route("/latest", get(scores::latest_score))
        .route("/summary", get(scores::score_summary))
        .route("/parts", get(scores::part_accuracy));

    let quiz_routes = Router::new()
        .route("/", get(quiz::get_paper))
        .route("/select", post(quiz::select_answer))
        .route("/grade", post(quiz::grade_paper));

    let schedule_routes = Router::new().route("/", get(schedule::list_schedule));

    Router::new()
        .nest("/api/scores", score_routes)
        .nest("/api/quiz", quiz_routes)
        // Session-scoped state above; the schedule is static and needs none.
        .layer(middleware::from_fn(session_middleware))
        .nest("/api/schedule", schedule_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
