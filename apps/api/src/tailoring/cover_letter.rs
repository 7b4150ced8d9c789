//! Deterministic templated cover-letter generation.

use crate::models::job::JobRow;

/// Longest job-description excerpt quoted in the letter.
const DESCRIPTION_EXCERPT_CHARS: usize = 100;

/// Renders a cover letter for `job` naming the candidate's strongest skills.
/// `skills` is expected in lexicon display order so output is stable.
pub fn generate(job: &JobRow, candidate_name: &str, skills: &[String]) -> String {
    let lead_skills = if skills.is_empty() {
        "software engineering".to_string()
    } else {
        skills
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let all_skills = if skills.is_empty() {
        "building reliable software".to_string()
    } else {
        skills.join(", ")
    };

    let excerpt: String = job
        .description
        .chars()
        .take(DESCRIPTION_EXCERPT_CHARS)
        .collect();

    format!(
        "Dear Hiring Manager at {company},\n\n\
         I am writing to express my strong interest in the {title} position. \
         With my background in {lead_skills}, I am confident that I can contribute \
         significantly to your team.\n\n\
         I was particularly drawn to this role because of the opportunity to work on \
         {excerpt}...\n\n\
         My experience includes building robust applications and solving complex problems. \
         My skills in {all_skills} align well with the requirements of {title}.\n\n\
         Thank you for your time and consideration.\n\n\
         Best regards,\n\
         {candidate_name}",
        company = job.company,
        title = job.title,
        excerpt = excerpt.trim_end(),
    )
}
