//! Cosine similarity between sparse term-weight vectors.

use std::collections::HashMap;

/// Standard dot-product-over-norms cosine, restricted to `[0, 1]`.
/// Zero-magnitude vectors (empty text, no overlapping vocabulary) score 0
/// rather than NaN; that guarantee is relied on by the score combiner.
pub fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    // Iterate the smaller map for the dot product.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum();

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn norm(v: &HashMap<String, f64>) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let v = vec_of(&[("rust", 0.5), ("kafka", 0.3)]);
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = vec_of(&[("rust", 1.0)]);
        let b = vec_of(&[("python", 1.0)]);
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_vector_scores_zero_not_nan() {
        let a = vec_of(&[("rust", 1.0)]);
        let empty = HashMap::new();
        assert_eq!(cosine(&a, &empty), 0.0);
        assert_eq!(cosine(&empty, &empty), 0.0);
    }

    #[test]
    fn test_zero_weight_vector_scores_zero() {
        let a = vec_of(&[("rust", 0.0)]);
        let b = vec_of(&[("rust", 1.0)]);
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let a = vec_of(&[("rust", 1.0), ("kafka", 1.0)]);
        let b = vec_of(&[("rust", 1.0), ("python", 1.0)]);
        let sim = cosine(&a, &b);
        assert!(sim > 0.0 && sim < 1.0, "sim was {sim}");
    }

    #[test]
    fn test_symmetry() {
        let a = vec_of(&[("rust", 0.7), ("grpc", 0.2)]);
        let b = vec_of(&[("rust", 0.4), ("kafka", 0.9)]);
        assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }
}
