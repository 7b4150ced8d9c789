//! Job store: the external collaborator the engine reads postings from.
//!
//! Carried as `Arc<dyn JobStore>` in `AppState` so the Postgres-backed store
//! and the in-memory store (tests, DB-less dev runs) swap without touching
//! handlers or engine code.

pub mod seed;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Mutex;

use crate::errors::AppError;
use crate::models::job::{JobRow, NewJob};

/// Query-string filters for `GET /jobs`. All optional; empty strings are
/// treated as absent.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct JobFilter {
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub remote_status: Option<String>,
    pub experience_level: Option<String>,
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Lists postings matching `filter`, newest first.
    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobRow>, AppError>;
    /// Fetches one posting by id.
    async fn get(&self, id: i64) -> Result<Option<JobRow>, AppError>;
    /// Inserts a posting and returns the stored row.
    async fn insert(&self, job: NewJob) -> Result<JobRow, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres store
// ────────────────────────────────────────────────────────────────────────────

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const JOB_COLUMNS: &str = "id, title, company, location, description, remote_status, \
experience_level, skills_required, salary_range, posted_at";

#[async_trait]
impl JobStore for PgJobStore {
    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobRow>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {JOB_COLUMNS} FROM jobs WHERE 1 = 1"));

        if let Some(location) = nonempty(&filter.location) {
            let pattern = format!("%{location}%");
            if location.eq_ignore_ascii_case("remote") {
                // "Remote" as a location also matches the remote_status flag.
                qb.push(" AND (location ILIKE ");
                qb.push_bind(pattern);
                qb.push(" OR remote_status = 'Remote')");
            } else {
                qb.push(" AND location ILIKE ");
                qb.push_bind(pattern);
            }
        }
        if let Some(remote_status) = nonempty(&filter.remote_status) {
            qb.push(" AND remote_status = ");
            qb.push_bind(remote_status.to_string());
        }
        if let Some(experience_level) = nonempty(&filter.experience_level) {
            qb.push(" AND experience_level = ");
            qb.push_bind(experience_level.to_string());
        }
        if let Some(keywords) = nonempty(&filter.keywords) {
            // Any keyword may match any of title/description/skills.
            let terms: Vec<&str> = keywords
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .collect();
            if !terms.is_empty() {
                qb.push(" AND (");
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        qb.push(" OR ");
                    }
                    let pattern = format!("%{term}%");
                    qb.push("title ILIKE ");
                    qb.push_bind(pattern.clone());
                    qb.push(" OR description ILIKE ");
                    qb.push_bind(pattern.clone());
                    qb.push(" OR skills_required ILIKE ");
                    qb.push_bind(pattern);
                }
                qb.push(")");
            }
        }

        qb.push(" ORDER BY posted_at DESC");
        let jobs = qb.build_query_as::<JobRow>().fetch_all(&self.pool).await?;
        Ok(jobs)
    }

    async fn get(&self, id: i64) -> Result<Option<JobRow>, AppError> {
        let job = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(job)
    }

    async fn insert(&self, job: NewJob) -> Result<JobRow, AppError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "INSERT INTO jobs (title, company, location, description, remote_status, \
             experience_level, skills_required, salary_range, posted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW()) \
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(job.title)
        .bind(job.company)
        .bind(job.location)
        .bind(job.description)
        .bind(job.remote_status)
        .bind(job.experience_level)
        .bind(job.skills_required)
        .bind(job.salary_range)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store
// ────────────────────────────────────────────────────────────────────────────

/// Backs tests and DB-less dev runs. Same filter semantics as the Postgres
/// store, expressed over cloned rows.
pub struct InMemoryJobStore {
    jobs: Mutex<Vec<JobRow>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }

    pub fn with_seed_jobs() -> Self {
        let store = Self::new();
        {
            let mut jobs = store.jobs.lock().expect("job store lock poisoned");
            for (i, job) in seed::seed_jobs().into_iter().enumerate() {
                jobs.push(materialize(i as i64 + 1, job));
            }
        }
        store
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

fn materialize(id: i64, job: NewJob) -> JobRow {
    JobRow {
        id,
        title: job.title,
        company: job.company,
        location: job.location,
        description: job.description,
        remote_status: job.remote_status,
        experience_level: job.experience_level,
        skills_required: job.skills_required,
        salary_range: job.salary_range,
        posted_at: Utc::now(),
    }
}

fn matches_filter(job: &JobRow, filter: &JobFilter) -> bool {
    if let Some(location) = nonempty(&filter.location) {
        let location_lower = location.to_lowercase();
        let in_location = job.location.to_lowercase().contains(&location_lower);
        let remote_hit = location.eq_ignore_ascii_case("remote") && job.remote_status == "Remote";
        if !in_location && !remote_hit {
            return false;
        }
    }
    if let Some(remote_status) = nonempty(&filter.remote_status) {
        if job.remote_status != remote_status {
            return false;
        }
    }
    if let Some(experience_level) = nonempty(&filter.experience_level) {
        if job.experience_level != experience_level {
            return false;
        }
    }
    if let Some(keywords) = nonempty(&filter.keywords) {
        let haystack = format!("{} {} {}", job.title, job.description, job.skills_required).to_lowercase();
        let any_hit = keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .any(|k| haystack.contains(&k.to_lowercase()));
        if !any_hit {
            return false;
        }
    }
    true
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobRow>, AppError> {
        let jobs = self.jobs.lock().expect("job store lock poisoned");
        let mut out: Vec<JobRow> = jobs
            .iter()
            .filter(|job| matches_filter(job, filter))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Ok(out)
    }

    async fn get(&self, id: i64) -> Result<Option<JobRow>, AppError> {
        let jobs = self.jobs.lock().expect("job store lock poisoned");
        Ok(jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn insert(&self, job: NewJob) -> Result<JobRow, AppError> {
        let mut jobs = self.jobs.lock().expect("job store lock poisoned");
        let next_id = jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
        let row = materialize(next_id, job);
        jobs.push(row.clone());
        Ok(row)
    }
}
