use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::file::{students::StudentStore, tutors::TutorStore};

pub mod students;
pub mod tutors;

/// Shared handler state: the two document stores, opened once at
/// startup and cloned into every request.
#[derive(Clone)]
pub struct ServerState {
    pub tutors: Arc<TutorStore>,
    pub students: Arc<StudentStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/api/register/tutor", post(tutors::register))
        .route("/api/register/student", post(students::register))
        .route("/api/tutors", get(tutors::list))
        .route("/api/tutor/select", post(tutors::select))
        .route("/api/tutor/notifications/:tutor_id", get(tutors::notifications));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
