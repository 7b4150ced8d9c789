mod config;
mod db;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
mod store;
mod tailoring;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::corpus::CorpusIndex;
use crate::matching::engine::MatchEngine;
use crate::matching::lexicon::SkillLexicon;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemoryJobStore, JobFilter, JobStore, PgJobStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Hunter API v{}", env!("CARGO_PKG_VERSION"));

    // Job store: Postgres when configured, else the in-memory seed store.
    let store: Arc<dyn JobStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            Arc::new(PgJobStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; using in-memory job store with seed data");
            Arc::new(InMemoryJobStore::with_seed_jobs())
        }
    };

    // Skill lexicon: immutable for the life of the process.
    let lexicon = Arc::new(SkillLexicon::default_lexicon()?);
    info!("Skill lexicon loaded ({} canonical skills)", lexicon.vocabulary().len());

    // Build the TF-IDF corpus over every known job description.
    let corpus = Arc::new(CorpusIndex::new());
    let jobs = store.list(&JobFilter::default()).await?;
    for job in &jobs {
        corpus.add_document(job.id, &job.description);
    }
    info!("Corpus index built over {} job descriptions", jobs.len());

    let engine = Arc::new(MatchEngine::new(lexicon, corpus));

    let state = AppState {
        store,
        engine,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
