//! Skill Extractor: derives a canonical skill set from free text.
//!
//! Scans 1- and 2-gram windows over the shared token stream, consulting the
//! alias table first and the vocabulary second. Unknown tokens are ignored;
//! the extractor never errors on unrecognized words.

use std::collections::HashSet;

use crate::matching::lexicon::SkillLexicon;
use crate::matching::tokenize::tokenize;

/// Extracts the set of canonical skills mentioned in `text`.
/// Empty text yields an empty set, which downstream scoring treats as a 0%
/// skill-overlap contribution rather than an error.
pub fn extract_skills(text: &str, lexicon: &SkillLexicon) -> HashSet<String> {
    let tokens = tokenize(text);
    let mut found = HashSet::new();

    for (i, token) in tokens.iter().enumerate() {
        if let Some(canonical) = lexicon.resolve(token) {
            found.insert(canonical.to_string());
        }
        if let Some(next) = tokens.get(i + 1) {
            let bigram = format!("{token} {next}");
            if let Some(canonical) = lexicon.resolve(&bigram) {
                found.insert(canonical.to_string());
            }
        }
    }

    found
}
