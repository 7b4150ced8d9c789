//! Match engine: wires extractor, gap analyzer, vectorizer, and combiner
//! into the per-request pipeline. Pure computation over an immutable corpus
//! snapshot; safe to run fully in parallel across requests.

use std::sync::Arc;

use tracing::debug;

use crate::matching::corpus::{vectorize, CorpusIndex};
use crate::matching::extractor::extract_skills;
use crate::matching::gap::analyze_gap;
use crate::matching::lexicon::SkillLexicon;
use crate::matching::scoring::{combine, skill_overlap_ratio};
use crate::matching::similarity::cosine;
use crate::matching::tokenize::tokenize;
use crate::models::job::JobRow;
use crate::tailoring::generator::{self, TailorSuggestion};

/// Engine output for one resume x job pair. Deterministic given identical
/// resume text, job, and corpus snapshot.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_overlap: f64,
    pub textual_similarity: f64,
    pub corpus_version: u64,
}

pub struct MatchEngine {
    lexicon: Arc<SkillLexicon>,
    corpus: Arc<CorpusIndex>,
}

impl MatchEngine {
    pub fn new(lexicon: Arc<SkillLexicon>, corpus: Arc<CorpusIndex>) -> Self {
        Self { lexicon, corpus }
    }

    pub fn lexicon(&self) -> &SkillLexicon {
        &self.lexicon
    }

    pub fn corpus(&self) -> &CorpusIndex {
        &self.corpus
    }

    /// Scores one resume against one job posting.
    ///
    /// Cold-start degrade: with no documents indexed, the textual term is 0
    /// and the score rests on skill overlap alone, rather than failing.
    pub fn score(&self, resume_text: &str, job: &JobRow) -> MatchOutcome {
        let resume_tokens = tokenize(resume_text);
        let resume_skills = extract_skills(resume_text, &self.lexicon);
        let required = self.lexicon.required_skills(&job.skills_required);

        let gap = analyze_gap(&required, &resume_skills, &resume_tokens);
        let skill_overlap = skill_overlap_ratio(gap.matched.len(), required.len());

        let snapshot = self.corpus.snapshot();
        let textual_similarity = if snapshot.is_empty() {
            debug!(job_id = job.id, "corpus empty; scoring on skill overlap only");
            0.0
        } else {
            let resume_vec = vectorize(resume_text, &snapshot);
            let job_vec = vectorize(&job.description, &snapshot);
            cosine(&resume_vec, &job_vec)
        };

        MatchOutcome {
            match_percentage: combine(skill_overlap, textual_similarity),
            matched_skills: gap.matched,
            missing_skills: gap.missing,
            skill_overlap,
            textual_similarity,
            corpus_version: snapshot.version(),
        }
    }

    /// Full tailoring pipeline: score, then map the gaps to suggestions.
    pub fn tailor(&self, resume_text: &str, job: &JobRow) -> Vec<TailorSuggestion> {
        let outcome = self.score(resume_text, job);
        generator::suggest(&outcome.missing_skills, resume_text, job, &self.lexicon)
    }

    /// Extracted resume skills in lexicon display order (for the cover-letter
    /// path, which needs a stable list rather than a set).
    pub fn resume_skills_ordered(&self, resume_text: &str) -> Vec<String> {
        let skills = extract_skills(resume_text, &self.lexicon);
        self.lexicon.ordered(&skills)
    }
}
