// Tailoring: deterministic, section-tagged resume suggestions and the
// templated cover-letter generator. No LLM calls anywhere in this tree.

pub mod cover_letter;
pub mod generator;
pub mod handlers;
