pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job listing & ingestion (ingestion is the one corpus mutation path)
        .route(
            "/jobs",
            get(matching::handle_list_jobs).post(matching::handle_create_job),
        )
        // Matching engine
        .route("/match", post(matching::handle_match))
        // Tailoring
        .route("/tailor", post(tailoring::handle_tailor))
        .route(
            "/generate-cover-letter",
            post(tailoring::handle_cover_letter),
        )
        .with_state(state)
}
