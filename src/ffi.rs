//! C ABI for scoring 16-bit token ids against a single reference.
//!
//! ```c
//! float sentence_bleu(const int16_t *reference, int reference_size,
//!                     const int16_t *hypothesis, int hypothesis_size);
//! ```

use std::ffi::c_int;

use crate::config::BleuConfig;
use crate::metrics::bleu::BleuScorer;

/// Returned when the pointer/size arguments are unusable.
pub const INVALID_ARGUMENT: f32 = -1.0;

/// Sentence BLEU of `hypothesis` against one `reference`.
///
/// Uses the default orders and epsilon with the unigram gate on, so a
/// hypothesis sharing no token with the reference scores 0. Orders longer
/// than the hypothesis are dropped rather than smoothed as `epsilon / 1`,
/// so hypotheses shorter than 4 tokens can score differently from an
/// NLTK `method1` sentence BLEU.
///
/// # Safety
///
/// Each non-null pointer must reference `size` readable, initialized `i16`
/// values that stay valid for the duration of the call. A null pointer is
/// accepted only with a size of 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sentence_bleu(
    reference: *const i16,
    reference_size: c_int,
    hypothesis: *const i16,
    hypothesis_size: c_int,
) -> f32 {
    // SAFETY: forwarded from this function's contract.
    let Some(reference) = (unsafe { tokens_from_raw(reference, reference_size) }) else {
        tracing::warn!(reference_size, "sentence_bleu: invalid reference buffer");
        return INVALID_ARGUMENT;
    };
    // SAFETY: as above.
    let Some(hypothesis) = (unsafe { tokens_from_raw(hypothesis, hypothesis_size) }) else {
        tracing::warn!(hypothesis_size, "sentence_bleu: invalid hypothesis buffer");
        return INVALID_ARGUMENT;
    };

    let config = BleuConfig::default().with_unigram_gate(true);

    match BleuScorer::new(config).and_then(|scorer| scorer.score(hypothesis, &[reference])) {
        Ok(s) => s as f32,
        Err(err) => {
            tracing::warn!(%err, "sentence_bleu failed");
            INVALID_ARGUMENT
        }
    }
}

unsafe fn tokens_from_raw<'a>(ptr: *const i16, size: c_int) -> Option<&'a [i16]> {
    let len = usize::try_from(size).ok()?;

    if len == 0 {
        return Some(&[]);
    }

    if ptr.is_null() {
        return None;
    }

    // SAFETY: non-null and, per the caller's contract, valid for `len` reads.
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(reference: &[i16], hypothesis: &[i16]) -> f32 {
        unsafe {
            sentence_bleu(
                reference.as_ptr(),
                reference.len() as c_int,
                hypothesis.as_ptr(),
                hypothesis.len() as c_int,
            )
        }
    }

    #[test]
    fn test_identical() {
        assert_eq!(call(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]), 1.0);
    }

    #[test]
    fn test_matches_library_score() {
        let reference = [2, 6, 6, 10, 7, 12];
        let hypothesis = [14, 13, 4, 3, 6, 10];

        let expected = crate::score(&hypothesis, &[reference]).unwrap() as f32;
        assert_eq!(call(&reference, &hypothesis), expected);
        assert!((expected - 0.086334).abs() < 1e-5);
    }

    #[test]
    fn test_no_shared_token_scores_zero() {
        // smoothed to ~0.0135 without the unigram gate
        assert!(crate::score(&[9], &[[1, 2, 3]]).unwrap() > 0.01);
        assert_eq!(call(&[1, 2, 3], &[9]), 0.0);
        assert_eq!(call(&[1, 2, 3, 4, 5], &[9, 8, 7, 6, 0]), 0.0);
    }

    #[test]
    fn test_empty_hypothesis() {
        assert_eq!(call(&[1, 2, 3], &[]), 0.0);
    }

    #[test]
    fn test_null_with_zero_size() {
        let reference = [1i16, 2, 3];
        let s = unsafe { sentence_bleu(reference.as_ptr(), 3, std::ptr::null(), 0) };
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_null_with_nonzero_size() {
        let reference = [1i16, 2, 3];
        let s = unsafe { sentence_bleu(reference.as_ptr(), 3, std::ptr::null(), 4) };
        assert_eq!(s, INVALID_ARGUMENT);
    }

    #[test]
    fn test_negative_size() {
        let hypothesis = [1i16, 2, 3];
        let s = unsafe { sentence_bleu(std::ptr::null(), -1, hypothesis.as_ptr(), 3) };
        assert_eq!(s, INVALID_ARGUMENT);
    }
}
