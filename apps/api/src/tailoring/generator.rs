//! Tailoring Suggestion Generator.
//!
//! Maps each missing skill (plus resume context) to an actionable,
//! section-tagged suggestion. Fully deterministic: the UI invites users to
//! re-run tailoring and compare, so identical inputs must yield identical
//! output. Template choice is keyed by a byte-sum of the skill name, the same
//! trick the rest of the pipeline uses for stable pseudo-variety.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matching::extractor::extract_skills;
use crate::matching::lexicon::SkillLexicon;
use crate::matching::tokenize::tokenize;
use crate::models::job::JobRow;

/// Per-request cap on tailored skills, bounding response size and latency.
pub const MAX_TAILORED_SKILLS: usize = 5;

/// Maximum length of a quoted resume excerpt in `original_context`.
const CONTEXT_EXCERPT_CHARS: usize = 180;

/// Resume section a suggestion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Summary,
    Skills,
    Experience,
    Strategy,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Section::Summary => "Summary",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Strategy => "Strategy",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "High Impact")]
    High,
    #[serde(rename = "Medium Impact")]
    Medium,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::High => f.write_str("High Impact"),
            Impact::Medium => f.write_str("Medium Impact"),
        }
    }
}

/// One concrete resume edit. Generated fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailorSuggestion {
    pub section: Section,
    pub impact: Impact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_context: Option<String>,
    pub suggestion: String,
}

/// Produces suggestions for the missing skills, in gap-analyzer order,
/// capped at `MAX_TAILORED_SKILLS`. Empty `missing` yields an empty list
/// (the resume already covers the posting).
pub fn suggest(
    missing: &[String],
    resume_text: &str,
    job: &JobRow,
    lexicon: &SkillLexicon,
) -> Vec<TailorSuggestion> {
    if missing.is_empty() {
        return Vec::new();
    }

    let top: Vec<&String> = missing.iter().take(MAX_TAILORED_SKILLS).collect();
    let sentences = split_sentences(resume_text);
    let mut out = Vec::with_capacity(top.len() + 2);

    // Lead with a summary rewrite naming the most important gaps.
    let named: Vec<String> = top.iter().take(2).map(|s| display_skill(s)).collect();
    out.push(TailorSuggestion {
        section: Section::Summary,
        impact: Impact::High,
        original_context: sentences.first().map(|s| excerpt(s)),
        suggestion: format!(
            "Work {} into your professional summary so screening filters see them immediately.",
            named.join(" and ")
        ),
    });

    for skill in &top {
        let anchor = find_anchor_sentence(&sentences, skill, lexicon);
        let impact = impact_for(skill, job);
        let (section, original_context, suggestion) = match anchor {
            Some(sentence) => (
                Section::Experience,
                Some(excerpt(sentence)),
                experience_bullet(skill, &job.title),
            ),
            None => (
                Section::Skills,
                None,
                format!(
                    "Add {} to your skills section and back it with a one-line mention of where you used it or a similar tool.",
                    display_skill(skill)
                ),
            ),
        };
        out.push(TailorSuggestion {
            section,
            impact,
            original_context,
            suggestion,
        });
    }

    // Close with transfer-framing advice for the top gap.
    let first = display_skill(top[0]);
    out.push(TailorSuggestion {
        section: Section::Strategy,
        impact: Impact::Medium,
        original_context: None,
        suggestion: format!(
            "If you have worked with tools similar to {first}, name them and state that you adapted to {first} quickly to show transferable depth."
        ),
    });

    out
}

/// Flattens suggestions into the plain-string advice form used by `/match`.
pub fn flatten(suggestions: &[TailorSuggestion]) -> Vec<String> {
    suggestions
        .iter()
        .map(|s| format!("{}: {}", s.section, s.suggestion))
        .collect()
}

/// Skills are quoted uppercase in generated text ("NODE.JS"), matching how
/// recruiters list them in ATS keyword fields.
fn display_skill(skill: &str) -> String {
    skill.to_uppercase()
}

/// "High Impact" when the skill appears in the job title or the first third
/// of the description; those placements signal the author's priorities.
fn impact_for(skill: &str, job: &JobRow) -> Impact {
    if job.title.to_lowercase().contains(skill) {
        return Impact::High;
    }
    let description = job.description.to_lowercase();
    let head: String = description
        .chars()
        .take(description.chars().count() / 3)
        .collect();
    if head.contains(skill) {
        Impact::High
    } else {
        Impact::Medium
    }
}

/// Splits resume text into sentences without breaking dotted tokens like
/// "node.js": a period only terminates a sentence when followed by
/// whitespace.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\n' | '!' | '?' => flush(&mut sentences, &mut current),
            '.' => {
                let ends = chars.peek().map_or(true, |next| next.is_whitespace());
                if ends {
                    flush(&mut sentences, &mut current);
                } else {
                    current.push(ch);
                }
            }
            _ => current.push(ch),
        }
    }
    flush(&mut sentences, &mut current);
    sentences
}

fn flush(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Role verbs that mark a sentence as experience narration.
const ROLE_VERBS: &[&str] = &[
    "built",
    "developed",
    "implemented",
    "designed",
    "led",
    "created",
    "managed",
    "deployed",
    "maintained",
    "engineered",
    "architected",
    "automated",
    "integrated",
    "optimized",
    "delivered",
    "launched",
    "migrated",
    "shipped",
];

/// Picks the first resume sentence that pairs a recognized skill with a role
/// verb: a plausible anchor to rephrase so it also demonstrates the missing
/// skill. Returns `None` when no such sentence exists, in which case the
/// suggestion falls back to the skills list.
fn find_anchor_sentence<'a>(
    sentences: &'a [String],
    missing_skill: &str,
    lexicon: &SkillLexicon,
) -> Option<&'a str> {
    sentences.iter().map(String::as_str).find(|sentence| {
        let tokens = tokenize(sentence);
        let has_verb = tokens.iter().any(|t| ROLE_VERBS.contains(&t.as_str()));
        if !has_verb {
            return false;
        }
        let skills = extract_skills(sentence, lexicon);
        // The anchor must mention some related skill, not the missing one
        // (which is by definition absent from the resume's skill set).
        skills.iter().any(|s| s != missing_skill)
    })
}

fn excerpt(sentence: &str) -> String {
    if sentence.chars().count() <= CONTEXT_EXCERPT_CHARS {
        return sentence.to_string();
    }
    let cut: String = sentence.chars().take(CONTEXT_EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// Experience-bullet templates. Index is a byte-sum of the skill name so the
/// same skill always gets the same bullet while different skills vary.
fn experience_bullet(skill: &str, job_title: &str) -> String {
    let display = display_skill(skill);
    let idx = skill.bytes().map(usize::from).sum::<usize>() % 4;
    match idx {
        0 => format!(
            "Implemented {display} solutions to cut processing latency in high-concurrency environments."
        ),
        1 => format!(
            "Leveraged {display} to build scalable infrastructure components aligned with {job_title} requirements."
        ),
        2 => format!(
            "Collaborated on {display} integration within a CI/CD pipeline, improving deployment frequency."
        ),
        _ => format!(
            "Architected modular components with {display} to keep the codebase maintainable and portable."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(title: &str, description: &str) -> JobRow {
        JobRow {
            id: 1,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            remote_status: "Remote".to_string(),
            experience_level: "Senior".to_string(),
            skills_required: String::new(),
            posted_at: Utc::now(),
            salary_range: None,
        }
    }

    fn lexicon() -> SkillLexicon {
        SkillLexicon::default_lexicon().unwrap()
    }

    fn missing(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_missing_skills_yields_no_suggestions() {
        let out = suggest(&[], "plenty of experience", &job("Dev", "desc"), &lexicon());
        assert!(out.is_empty());
    }

    #[test]
    fn test_every_suggestion_is_skill_tied_and_capped() {
        let many = missing(&["kafka", "go", "terraform", "ansible", "redis", "spark", "airflow"]);
        let out = suggest(&many, "resume text", &job("Dev", "desc"), &lexicon());
        // summary + capped skills + strategy
        assert_eq!(out.len(), 1 + MAX_TAILORED_SKILLS + 1);
        assert_eq!(out[0].section, Section::Summary);
        assert_eq!(out.last().unwrap().section, Section::Strategy);
        for (skill, suggestion) in many.iter().take(MAX_TAILORED_SKILLS).zip(&out[1..]) {
            assert!(
                suggestion.suggestion.contains(&skill.to_uppercase()),
                "suggestion '{}' does not name {skill}",
                suggestion.suggestion
            );
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let resume = "Built data pipelines in Python. Deployed services with Docker.";
        let job = job("Platform Engineer", "Kafka and Terraform heavy role");
        let a = suggest(&missing(&["kafka", "terraform"]), resume, &job, &lexicon());
        let b = suggest(&missing(&["kafka", "terraform"]), resume, &job, &lexicon());
        assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
    }

    #[test]
    fn test_anchor_sentence_targets_experience_section() {
        let resume = "Summary: generalist engineer. Built streaming pipelines with Python and Kafka for analytics.";
        let out = suggest(&missing(&["terraform"]), resume, &job("SRE", "infra role"), &lexicon());
        let per_skill = &out[1];
        assert_eq!(per_skill.section, Section::Experience);
        let context = per_skill.original_context.as_deref().unwrap();
        assert!(context.contains("Built streaming pipelines"));
    }

    #[test]
    fn test_no_anchor_falls_back_to_skills_section() {
        let resume = "Enthusiastic learner seeking opportunities.";
        let out = suggest(&missing(&["terraform"]), resume, &job("SRE", "infra role"), &lexicon());
        let per_skill = &out[1];
        assert_eq!(per_skill.section, Section::Skills);
        assert!(per_skill.original_context.is_none());
    }

    #[test]
    fn test_skill_in_title_is_high_impact() {
        let job = job("Senior Kafka Engineer", "streaming platform role");
        let out = suggest(&missing(&["kafka"]), "resume", &job, &lexicon());
        assert_eq!(out[1].impact, Impact::High);
    }

    #[test]
    fn test_skill_in_first_third_of_description_is_high_impact() {
        let description = "kafka first. ".to_string() + &"filler words ".repeat(30);
        let job = job("Engineer", &description);
        let out = suggest(&missing(&["kafka"]), "resume", &job, &lexicon());
        assert_eq!(out[1].impact, Impact::High);
    }

    #[test]
    fn test_skill_buried_late_is_medium_impact() {
        let description = "filler words ".repeat(30) + "and finally kafka";
        let job = job("Engineer", &description);
        let out = suggest(&missing(&["kafka"]), "resume", &job, &lexicon());
        assert_eq!(out[1].impact, Impact::Medium);
    }

    #[test]
    fn test_impact_serializes_with_label() {
        let value = serde_json::to_value(Impact::High).unwrap();
        assert_eq!(value, "High Impact");
    }

    #[test]
    fn test_flatten_prefixes_section() {
        let out = suggest(&missing(&["kafka"]), "resume", &job("Dev", "desc"), &lexicon());
        let flat = flatten(&out);
        assert_eq!(flat.len(), out.len());
        assert!(flat[0].starts_with("Summary: "));
    }

    #[test]
    fn test_split_sentences_preserves_dotted_tokens() {
        let sentences = split_sentences("Shipped a node.js API. Then moved on.");
        assert_eq!(sentences, vec!["Shipped a node.js API", "Then moved on"]);
    }

    #[test]
    fn test_excerpt_truncates_long_sentences() {
        let long = "word ".repeat(100);
        let cut = excerpt(long.trim());
        assert!(cut.chars().count() <= CONTEXT_EXCERPT_CHARS + 3);
        assert!(cut.ends_with("..."));
    }
}
