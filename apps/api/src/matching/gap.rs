//! Gap Analyzer: which required skills the resume does not cover.

use std::collections::HashSet;

/// Required skills split into covered and missing, both in the job's declared
/// order (authors list skills most-important first, so no re-sorting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapAnalysis {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Computes `required − resume`, preserving declaration order.
///
/// A required skill counts as present when it is in the extracted canonical
/// set, or when it appears verbatim in the resume token stream. The token
/// fallback keeps required skills outside the vocabulary from being reported
/// missing when the resume plainly names them. No truncation here; display
/// caps are a presentation concern.
pub fn analyze_gap(
    required: &[String],
    resume_skills: &HashSet<String>,
    resume_tokens: &[String],
) -> GapAnalysis {
    let mut grams: HashSet<String> = resume_tokens.iter().cloned().collect();
    for pair in resume_tokens.windows(2) {
        grams.insert(format!("{} {}", pair[0], pair[1]));
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in required {
        if resume_skills.contains(skill) || grams.contains(skill) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    GapAnalysis { matched, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> HashSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn req(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_preserves_declared_order() {
        let gap = analyze_gap(&req(&["react", "node.js", "aws", "kafka"]), &set(&["aws"]), &[]);
        assert_eq!(gap.missing, vec!["react", "node.js", "kafka"]);
        assert_eq!(gap.matched, vec!["aws"]);
    }

    #[test]
    fn test_worked_scenario_missing_is_node_js() {
        let gap = analyze_gap(&req(&["react", "node.js", "aws"]), &set(&["react", "aws"]), &[]);
        assert_eq!(gap.missing, vec!["node.js"]);
        assert_eq!(gap.matched.len(), 2);
    }

    #[test]
    fn test_missing_is_subset_of_required_and_disjoint_from_resume() {
        let required = req(&["react", "node.js", "aws"]);
        let resume = set(&["react", "python"]);
        let gap = analyze_gap(&required, &resume, &[]);
        for skill in &gap.missing {
            assert!(required.contains(skill));
            assert!(!resume.contains(skill));
        }
    }

    #[test]
    fn test_empty_required_yields_nothing() {
        let gap = analyze_gap(&[], &set(&["rust"]), &[]);
        assert!(gap.missing.is_empty());
        assert!(gap.matched.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let gap = analyze_gap(&req(&["go", "docker"]), &HashSet::new(), &[]);
        assert_eq!(gap.missing, vec!["go", "docker"]);
    }

    #[test]
    fn test_out_of_vocabulary_skill_found_in_token_stream() {
        let tokens: Vec<String> = ["shipped", "cobol", "batch", "jobs"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let gap = analyze_gap(&req(&["cobol", "fortran"]), &HashSet::new(), &tokens);
        assert_eq!(gap.matched, vec!["cobol"]);
        assert_eq!(gap.missing, vec!["fortran"]);
    }

    #[test]
    fn test_bigram_token_fallback() {
        let tokens: Vec<String> = ["ran", "chaos", "engineering", "drills"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let gap = analyze_gap(&req(&["chaos engineering"]), &HashSet::new(), &tokens);
        assert!(gap.missing.is_empty());
    }
}
