//! Axum route handlers for tailoring and cover-letter generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::cover_letter;
use crate::tailoring::generator::TailorSuggestion;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub resume_text: String,
    pub job_id: i64,
}

/// Structured tailoring output. The flattened string variant of the same
/// suggestions rides on `POST /match`.
#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub suggestions: Vec<TailorSuggestion>,
    pub job_title: String,
    pub company: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub job_id: i64,
    pub candidate_name: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /tailor
///
/// Returns section-tagged suggestions for closing the gap between the resume
/// and one posting. Deterministic for identical inputs and corpus state.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
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

    let suggestions = state.engine.tailor(&request.resume_text, &job);

    Ok(Json(TailorResponse {
        suggestions,
        job_title: job.title,
        company: job.company,
    }))
}

/// POST /generate-cover-letter
///
/// Renders a templated cover letter from the candidate's extracted skills
/// and the posting's fields.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.candidate_name.trim().is_empty() {
        return Err(AppError::Validation(
            "candidate_name cannot be empty".to_string(),
        ));
    }

    let job = state
        .store
        .get(request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let skills = state.engine.resume_skills_ordered(&request.resume_text);
    let cover_letter = cover_letter::generate(&job, request.candidate_name.trim(), &skills);

    Ok(Json(CoverLetterResponse { cover_letter }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::matching::corpus::CorpusIndex;
    use crate::matching::engine::MatchEngine;
    use crate::matching::lexicon::SkillLexicon;
    use crate::store::InMemoryJobStore;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(InMemoryJobStore::with_seed_jobs()),
            engine: Arc::new(MatchEngine::new(
                Arc::new(SkillLexicon::default_lexicon().unwrap()),
                Arc::new(CorpusIndex::new()),
            )),
            config: Config {
                database_url: None,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_tailor_returns_job_identity() {
        let state = test_state();
        let Json(response) = handle_tailor(
            State(state),
            Json(TailorRequest {
                resume_text: "Built Django apps with MySQL".to_string(),
                job_id: 1,
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.job_title, "Senior Python Developer");
        assert_eq!(response.company, "TechCorp");
        assert!(!response.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_tailor_rejects_empty_resume() {
        let state = test_state();
        let err = handle_tailor(
            State(state),
            Json(TailorRequest {
                resume_text: "".to_string(),
                job_id: 1,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_tailor_unknown_job_is_not_found() {
        let state = test_state();
        let err = handle_tailor(
            State(state),
            Json(TailorRequest {
                resume_text: "resume".to_string(),
                job_id: 99_999,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cover_letter_names_candidate_and_company() {
        let state = test_state();
        let Json(response) = handle_cover_letter(
            State(state),
            Json(CoverLetterRequest {
                job_id: 2,
                candidate_name: "Grace Hopper".to_string(),
                resume_text: "React and JavaScript front ends".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(response.cover_letter.contains("Grace Hopper"));
        assert!(response.cover_letter.contains("DesignSync"));
        assert!(response.cover_letter.contains("react"));
    }

    #[tokio::test]
    async fn test_cover_letter_requires_candidate_name() {
        let state = test_state();
        let err = handle_cover_letter(
            State(state),
            Json(CoverLetterRequest {
                job_id: 1,
                candidate_name: " ".to_string(),
                resume_text: "resume".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
