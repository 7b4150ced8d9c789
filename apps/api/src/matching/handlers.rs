//! Axum route handlers for the matching engine and job listing.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobRow, NewJob};
use crate::state::AppState;
use crate::store::JobFilter;
use crate::tailoring::generator;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_id: i64,
}

/// Wire shape of `POST /match`. `tailoring_advice` is the flattened string
/// form; consumers that want structured suggestions call `/tailor`.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub tailoring_advice: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /match
///
/// Scores a resume against one job posting. Empty resume text is a distinct
/// validation error (not a silent 0% score) so the caller can prompt the
/// user; an unknown job id fails the whole request.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let job = state
        .store
        .get(request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let outcome = state.engine.score(&request.resume_text, &job);
    let suggestions =
        generator::suggest(&outcome.missing_skills, &request.resume_text, &job, state.engine.lexicon());
    let tailoring_advice = if suggestions.is_empty() {
        vec!["Your resume already covers every skill this posting calls for.".to_string()]
    } else {
        generator::flatten(&suggestions)
    };

    Ok(Json(MatchResponse {
        match_percentage: outcome.match_percentage,
        matched_skills: outcome.matched_skills,
        missing_skills: outcome.missing_skills,
        tailoring_advice,
    }))
}

/// GET /jobs?keywords=&location=&remote_status=&experience_level=
///
/// Returns the job list the corpus index is built over, newest first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(state.store.list(&filter).await?))
}

/// POST /jobs
///
/// Inserts a posting and rebuilds the corpus snapshot. This is the only
/// operation that mutates corpus statistics.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(new_job): Json<NewJob>,
) -> Result<Json<JobRow>, AppError> {
    if new_job.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if new_job.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let job = state.store.insert(new_job).await?;
    state.engine.corpus().add_document(job.id, &job.description);
    info!(job_id = job.id, "job added; corpus snapshot rebuilt");

    Ok(Json(job))
}
