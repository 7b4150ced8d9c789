// Hybrid resume-job matching engine.
// Pipeline: skill extraction -> gap analysis -> TF-IDF cosine -> 70/30 blend.
// Everything except the corpus index is a pure function of its inputs.

pub mod corpus;
pub mod engine;
pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod lexicon;
pub mod scoring;
pub mod similarity;
pub mod tokenize;
