//! Hybrid score combiner: blends skill overlap and textual similarity into
//! the externally observed match percentage.

/// Weight of the skill-overlap ratio in the blended score.
/// Fixed design constants, deliberately not user-configurable.
pub const SKILL_OVERLAP_WEIGHT: f64 = 0.70;
/// Weight of TF-IDF cosine similarity in the blended score.
pub const TEXTUAL_WEIGHT: f64 = 0.30;

/// `|resume ∩ required| / |required|`, defined as 0 when the job declares no
/// recognized skills (never divides by zero).
pub fn skill_overlap_ratio(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    matched as f64 / required as f64
}

/// `round(100 * (0.70 * overlap + 0.30 * textual))`, clamped to `[0, 100]`.
pub fn combine(skill_overlap: f64, textual_similarity: f64) -> u32 {
    let blended = SKILL_OVERLAP_WEIGHT * skill_overlap + TEXTUAL_WEIGHT * textual_similarity;
    (100.0 * blended).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_overlap_and_full_similarity_is_100() {
        assert_eq!(combine(1.0, 1.0), 100);
    }

    #[test]
    fn test_no_overlap_and_no_similarity_is_0() {
        assert_eq!(combine(0.0, 0.0), 0);
    }

    #[test]
    fn test_worked_scenario_two_of_three_skills_point_four_similarity() {
        // overlap = 2/3, textual = 0.4 -> round(100 * (0.4667 + 0.12)) = 59
        assert_eq!(combine(2.0 / 3.0, 0.4), 59);
    }

    #[test]
    fn test_zero_required_skills_caps_score_at_textual_term() {
        let score = combine(skill_overlap_ratio(0, 0), 1.0);
        assert_eq!(score, 30);
    }

    #[test]
    fn test_overlap_ratio_zero_division_guard() {
        assert_eq!(skill_overlap_ratio(0, 0), 0.0);
        assert_eq!(skill_overlap_ratio(5, 0), 0.0);
    }

    #[test]
    fn test_overlap_ratio_partial() {
        assert!((skill_overlap_ratio(2, 3) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_always_in_bounds() {
        for overlap in [0.0, 0.25, 0.5, 1.0] {
            for textual in [0.0, 0.3, 0.9, 1.0] {
                let score = combine(overlap, textual);
                assert!(score <= 100);
            }
        }
        // Inputs outside the nominal range clamp rather than overflow.
        assert_eq!(combine(2.0, 2.0), 100);
        assert_eq!(combine(-1.0, -1.0), 0);
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((SKILL_OVERLAP_WEIGHT + TEXTUAL_WEIGHT - 1.0).abs() < f64::EPSILON);
    }
}
