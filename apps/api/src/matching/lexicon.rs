#![allow(dead_code)]

//! Skill vocabulary and alias table.
//!
//! The lexicon is an explicitly constructed, immutable configuration object
//! passed into the extractor, never ambient global state, so tests can
//! substitute their own vocabularies. A built-in default ships with the
//! binary; it is validated at construction like any other lexicon.

use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};

/// Canonical skill vocabulary plus surface-form aliases.
///
/// Invariant: every alias target is a vocabulary entry (checked in `new`).
/// Vocabulary order is preserved and used as the display rank for extracted
/// skill sets, which keeps every output built from a `HashSet` deterministic.
#[derive(Debug, Clone)]
pub struct SkillLexicon {
    vocabulary: Vec<String>,
    rank: HashMap<String, usize>,
    aliases: HashMap<String, String>,
}

impl SkillLexicon {
    pub fn new(vocabulary: &[&str], aliases: &[(&str, &str)]) -> Result<Self> {
        let mut ordered = Vec::with_capacity(vocabulary.len());
        let mut rank = HashMap::with_capacity(vocabulary.len());
        for entry in vocabulary {
            let canonical = entry.trim().to_lowercase();
            if canonical.is_empty() {
                bail!("vocabulary entries cannot be empty");
            }
            if !rank.contains_key(&canonical) {
                rank.insert(canonical.clone(), ordered.len());
                ordered.push(canonical);
            }
        }

        let mut alias_map = HashMap::with_capacity(aliases.len());
        for (surface, target) in aliases {
            let surface = surface.trim().to_lowercase();
            let target = target.trim().to_lowercase();
            if !rank.contains_key(&target) {
                bail!("alias '{surface}' targets '{target}', which is not in the vocabulary");
            }
            alias_map.insert(surface, target);
        }

        Ok(Self {
            vocabulary: ordered,
            rank,
            aliases: alias_map,
        })
    }

    /// The built-in vocabulary and alias table.
    pub fn default_lexicon() -> Result<Self> {
        Self::new(DEFAULT_VOCABULARY, DEFAULT_ALIASES)
    }

    /// Resolves a lowercase surface form to its canonical skill name.
    /// Aliases win over direct vocabulary membership; unknown forms are `None`.
    pub fn resolve(&self, surface: &str) -> Option<&str> {
        if let Some(canonical) = self.aliases.get(surface) {
            return Some(canonical);
        }
        self.rank
            .get_key_value(surface)
            .map(|(canonical, _)| canonical.as_str())
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.rank.contains_key(canonical)
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Parses a job's raw `skills_required` field (comma-separated) into an
    /// ordered canonical list. Duplicates collapse, declaration order is kept
    /// (job authors list skills most-important first). Surface forms outside
    /// the vocabulary are kept in normalized form rather than dropped, so a
    /// posting asking for something we have no alias for still produces a
    /// gap entry instead of silently shrinking the requirement list.
    pub fn required_skills(&self, raw: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for piece in raw.split(',') {
            let normalized = normalize_surface(piece);
            if normalized.is_empty() {
                continue;
            }
            let canonical = self
                .resolve(&normalized)
                .map(str::to_string)
                .unwrap_or(normalized);
            if seen.insert(canonical.clone()) {
                out.push(canonical);
            }
        }
        out
    }

    /// Orders a canonical skill set by vocabulary rank (unknown skills last,
    /// alphabetically). Gives set-derived outputs a stable order.
    pub fn ordered(&self, skills: &HashSet<String>) -> Vec<String> {
        let mut out: Vec<&String> = skills.iter().collect();
        out.sort_by_key(|s| (self.rank.get(*s).copied().unwrap_or(usize::MAX), (*s).clone()));
        out.into_iter().cloned().collect()
    }
}

/// Lowercases, trims, and collapses inner whitespace of a raw skill string.
fn normalize_surface(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical skill names recognized out of the box. Ordering doubles as the
/// display rank for extracted skill sets.
const DEFAULT_VOCABULARY: &[&str] = &[
    // Languages
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "c#",
    "go",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "sql",
    "bash",
    // Frontend
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "tailwind",
    "framer motion",
    // Backend frameworks
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "rails",
    "laravel",
    ".net",
    // Data stores
    "postgresql",
    "mysql",
    "sqlite",
    "mongodb",
    "redis",
    "elasticsearch",
    // Messaging & APIs
    "kafka",
    "rabbitmq",
    "graphql",
    "rest",
    "grpc",
    // Cloud & infrastructure
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "jenkins",
    "ci/cd",
    "linux",
    "git",
    // Data science & ML
    "pandas",
    "numpy",
    "scikit-learn",
    "spacy",
    "nltk",
    "pytorch",
    "tensorflow",
    "spark",
    "hadoop",
    "airflow",
    "machine learning",
    "data analysis",
    // Practices
    "microservices",
    "agile",
    "scrum",
];

/// Surface-form synonyms, all mapping into `DEFAULT_VOCABULARY`.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("angularjs", "angular"),
    ("nextjs", "next.js"),
    ("tailwindcss", "tailwind"),
    ("k8s", "kubernetes"),
    ("golang", "go"),
    ("py", "python"),
    ("mongo", "mongodb"),
    ("sklearn", "scikit-learn"),
    ("scikit learn", "scikit-learn"),
    ("cpp", "c++"),
    ("csharp", "c#"),
    ("dotnet", ".net"),
    ("gcloud", "gcp"),
    ("google cloud", "gcp"),
    ("amazon web services", "aws"),
    ("ml", "machine learning"),
    ("cicd", "ci/cd"),
    ("restful", "rest"),
    ("es", "elasticsearch"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_builds() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        assert!(lexicon.contains("postgresql"));
        assert!(lexicon.contains("node.js"));
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        assert_eq!(lexicon.resolve("postgres"), Some("postgresql"));
        assert_eq!(lexicon.resolve("k8s"), Some("kubernetes"));
    }

    #[test]
    fn test_canonical_resolves_to_itself() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        assert_eq!(lexicon.resolve("rust"), Some("rust"));
    }

    #[test]
    fn test_unknown_surface_is_none() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        assert_eq!(lexicon.resolve("underwater-basket-weaving"), None);
    }

    #[test]
    fn test_alias_to_missing_target_is_rejected() {
        let err = SkillLexicon::new(&["react"], &[("ng", "angular")]).unwrap_err();
        assert!(err.to_string().contains("angular"));
    }

    #[test]
    fn test_required_skills_canonicalizes_and_dedupes() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        let required = lexicon.required_skills("Postgres, PostgreSQL, Node, AWS");
        assert_eq!(required, vec!["postgresql", "node.js", "aws"]);
    }

    #[test]
    fn test_required_skills_keeps_declaration_order() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        let required = lexicon.required_skills("React, Node.js, AWS");
        assert_eq!(required, vec!["react", "node.js", "aws"]);
    }

    #[test]
    fn test_required_skills_keeps_unknown_entries() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        let required = lexicon.required_skills("COBOL, rust");
        assert_eq!(required, vec!["cobol", "rust"]);
    }

    #[test]
    fn test_required_skills_empty_field_is_empty() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        assert!(lexicon.required_skills("").is_empty());
        assert!(lexicon.required_skills(" , ,").is_empty());
    }

    #[test]
    fn test_ordered_follows_vocabulary_rank() {
        let lexicon = SkillLexicon::default_lexicon().unwrap();
        let set: HashSet<String> = ["aws", "python", "react"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(lexicon.ordered(&set), vec!["python", "react", "aws"]);
    }
}
