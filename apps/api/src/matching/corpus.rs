//! Corpus Index: TF-IDF statistics over the set of job description texts.
//!
//! The index is the engine's only shared mutable state. Statistics live in an
//! immutable `CorpusSnapshot` behind an `RwLock<Arc<..>>`; updates rebuild a
//! fresh snapshot and swap it in wholesale, so concurrent readers never
//! observe a half-updated IDF table. Requests vectorize against whichever
//! snapshot was current when they grabbed it (stale reads are fine).

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::matching::tokenize::tokenize;

/// Immutable IDF table for one corpus version.
#[derive(Debug)]
pub struct CorpusSnapshot {
    version: u64,
    doc_count: usize,
    doc_frequency: HashMap<String, usize>,
    idf: HashMap<String, f64>,
}

impl CorpusSnapshot {
    fn empty() -> Self {
        Self {
            version: 0,
            doc_count: 0,
            doc_frequency: HashMap::new(),
            idf: HashMap::new(),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// No documents indexed yet (cold start). Callers degrade to
    /// skill-overlap-only scoring instead of failing the request.
    pub fn is_empty(&self) -> bool {
        self.doc_count == 0
    }

    pub fn doc_frequency(&self, term: &str) -> usize {
        self.doc_frequency.get(term).copied().unwrap_or(0)
    }

    /// Smoothed IDF. Terms outside the corpus fall through to df = 0, which
    /// the smoothing keeps finite and positive.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf
            .get(term)
            .copied()
            .unwrap_or_else(|| smoothed_idf(self.doc_count, 0))
    }
}

/// `idf(t) = ln((N + 1) / (df(t) + 1)) + 1`. Always positive, defined even
/// for the first document and for unseen terms.
fn smoothed_idf(doc_count: usize, doc_frequency: usize) -> f64 {
    ((doc_count as f64 + 1.0) / (doc_frequency as f64 + 1.0)).ln() + 1.0
}

struct IndexInner {
    /// doc id -> distinct terms, kept so document frequencies can be rebuilt
    /// on any add/update.
    docs: HashMap<i64, HashSet<String>>,
    snapshot: Arc<CorpusSnapshot>,
}

/// Process-wide TF-IDF index over job descriptions.
/// Mutated only through `add_document`; everything else reads snapshots.
pub struct CorpusIndex {
    inner: RwLock<IndexInner>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(IndexInner {
                docs: HashMap::new(),
                snapshot: Arc::new(CorpusSnapshot::empty()),
            }),
        }
    }

    /// Adds or replaces a document and publishes a rebuilt snapshot.
    /// Full df/idf recompute under the write lock: at job-board scale this is
    /// cheap, and it keeps the snapshot trivially consistent.
    pub fn add_document(&self, doc_id: i64, text: &str) {
        let terms: HashSet<String> = tokenize(text).into_iter().collect();

        let mut inner = self.inner.write().expect("corpus index lock poisoned");
        inner.docs.insert(doc_id, terms);

        let doc_count = inner.docs.len();
        let mut doc_frequency: HashMap<String, usize> = HashMap::new();
        for terms in inner.docs.values() {
            for term in terms {
                *doc_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }
        let idf = doc_frequency
            .iter()
            .map(|(term, df)| (term.clone(), smoothed_idf(doc_count, *df)))
            .collect();

        let version = inner.snapshot.version + 1;
        inner.snapshot = Arc::new(CorpusSnapshot {
            version,
            doc_count,
            doc_frequency,
            idf,
        });
        debug!(doc_id, doc_count, version, "corpus snapshot rebuilt");
    }

    /// The snapshot current at call time. Cheap Arc clone; never blocks on
    /// an in-progress rebuild longer than the lock handoff.
    pub fn snapshot(&self) -> Arc<CorpusSnapshot> {
        self.inner
            .read()
            .expect("corpus index lock poisoned")
            .snapshot
            .clone()
    }
}

impl Default for CorpusIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns text into a sparse term -> weight vector against a corpus snapshot.
/// `tf(t)` is the raw count normalized by total token count; weight is
/// `tf * idf`. Queries never mutate corpus statistics.
pub fn vectorize(text: &str, snapshot: &CorpusSnapshot) -> HashMap<String, f64> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return HashMap::new();
    }
    let total = tokens.len() as f64;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(term, count)| {
            let tf = count as f64 / total;
            let weight = tf * snapshot.idf(&term);
            (term, weight)
        })
        .collect()
}
