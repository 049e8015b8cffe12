// Reference length nearest to the candidate; the shorter one wins a tie.
pub(crate) fn closest_ref_length<T, R: AsRef<[T]>>(
    references: &[R],
    candidate_len: usize,
) -> usize {
    references
        .iter()
        .map(|r| r.as_ref().len())
        .min_by_key(|&ref_len| (ref_len.abs_diff(candidate_len), ref_len))
        .unwrap_or(0)
}

pub(crate) fn brevity_penalty(closest_ref_len: usize, candidate_len: usize) -> f64 {
    if candidate_len > closest_ref_len {
        1f64
    } else if candidate_len == 0 {
        0f64
    } else {
        (1f64 - closest_ref_len as f64 / candidate_len as f64).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_ref_length_exact() {
        let refs = [vec![0; 3], vec![0; 5], vec![0; 9]];
        assert_eq!(closest_ref_length::<i32, _>(&refs, 5), 5);
    }

    #[test]
    fn test_closest_ref_length_tie_prefers_shorter() {
        let refs = [vec![0; 6], vec![0; 4]];
        assert_eq!(closest_ref_length::<i32, _>(&refs, 5), 4);

        let refs = [vec![0; 4], vec![0; 6]];
        assert_eq!(closest_ref_length::<i32, _>(&refs, 5), 4);
    }

    #[test]
    fn test_closest_ref_length_empty_candidate() {
        let refs = [vec![0; 2], vec![0; 7]];
        assert_eq!(closest_ref_length::<i32, _>(&refs, 0), 2);
    }

    #[test]
    fn test_brevity_penalty_longer_candidate() {
        assert_eq!(brevity_penalty(3, 5), 1.0);
    }

    #[test]
    fn test_brevity_penalty_equal_length() {
        assert_eq!(brevity_penalty(5, 5), 1.0);
    }

    #[test]
    fn test_brevity_penalty_empty_candidate() {
        assert_eq!(brevity_penalty(3, 0), 0.0);
        assert_eq!(brevity_penalty(0, 0), 0.0);
    }

    #[test]
    fn test_brevity_penalty_shorter_candidate() {
        let bp = brevity_penalty(6, 3);
        assert!((bp - (-1f64).exp()).abs() < 1e-12);
    }
}
