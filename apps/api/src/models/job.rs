use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting as stored. `skills_required` is the author's comma-separated
/// raw skill list; canonicalization happens in the engine via the lexicon.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub remote_status: String,
    pub experience_level: String,
    pub skills_required: String,
    pub salary_range: Option<String>,
    pub posted_at: DateTime<Utc>,
}

/// Payload for `POST /jobs`. Insertion is the one operation that mutates the
/// corpus index.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub remote_status: String,
    pub experience_level: String,
    pub skills_required: String,
    pub salary_range: Option<String>,
}
