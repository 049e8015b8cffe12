//! BLEU (Bilingual Evaluation Understudy) similarity metric.
//!
//! Sentence-level BLEU with clipped n-gram precision, the closest-reference
//! brevity penalty, and method1 smoothing for orders with zero matches.

use std::hash::Hash;

use crate::config::BleuConfig;
use crate::error::BleuError;
use crate::hash_iterators::word_hashes;
use crate::metrics::shared::{clipped_matches, max_reference_counts, ngram_counts};
use crate::utils::{brevity_penalty, closest_ref_length};

/// Clipped match count and total n-gram count for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramPrecision {
    pub order: usize,
    pub matches: usize,
    pub total: usize,
}

impl NgramPrecision {
    /// `matches / total`, or `None` when the candidate has no n-grams of this order.
    #[must_use]
    pub fn raw(&self) -> Option<f64> {
        (self.total > 0).then(|| self.matches as f64 / self.total as f64)
    }

    /// Precision after method1 smoothing. `None` means the order is dropped.
    #[must_use]
    pub fn smoothed(&self, epsilon: f64) -> Option<f64> {
        if self.total == 0 {
            return None;
        }

        if self.matches == 0 {
            Some(epsilon / self.total as f64)
        } else {
            self.raw()
        }
    }
}

/// Everything that went into a single BLEU score.
#[derive(Debug, Clone, PartialEq)]
pub struct BleuReport {
    /// One entry per order the candidate is long enough to have,
    /// `1..=min(max_order, candidate_len)`. Longer orders are dropped.
    pub precisions: Vec<NgramPrecision>,
    pub candidate_len: usize,
    pub closest_ref_len: usize,
    pub brevity_penalty: f64,
    pub score: f64,
}

/// Sentence-level BLEU scorer. Holds only its configuration, so one instance
/// can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BleuScorer {
    config: BleuConfig,
}

impl BleuScorer {
    pub fn new(config: BleuConfig) -> Result<Self, BleuError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &BleuConfig {
        &self.config
    }

    /// Scores `candidate` against `references`.
    ///
    /// # Errors
    ///
    /// [`BleuError::InvalidInput`] if `references` is empty.
    pub fn score<T, R>(&self, candidate: &[T], references: &[R]) -> Result<f64, BleuError>
    where
        T: Eq + Hash,
        R: AsRef<[T]>,
    {
        self.evaluate(candidate, references).map(|report| report.score)
    }

    /// Like [`score`](Self::score), but keeps the per-order precisions and
    /// the brevity penalty.
    pub fn evaluate<T, R>(
        &self,
        candidate: &[T],
        references: &[R],
    ) -> Result<BleuReport, BleuError>
    where
        T: Eq + Hash,
        R: AsRef<[T]>,
    {
        if references.is_empty() {
            return Err(BleuError::invalid_input("reference set must not be empty"));
        }

        let candidate_len = candidate.len();

        // orders past the candidate length have no n-grams to count
        let counted_orders = self.config.max_order.min(candidate_len);
        let precisions: Vec<NgramPrecision> = (1..=counted_orders)
            .map(|n| modified_precision(candidate, references, n))
            .collect();

        let closest_ref_len = closest_ref_length::<T, R>(references, candidate_len);
        let bp = brevity_penalty(closest_ref_len, candidate_len);

        let score = bp * self.precision_score(&precisions);

        tracing::debug!(
            candidate_len,
            closest_ref_len,
            brevity_penalty = bp,
            score,
            "sentence bleu"
        );

        Ok(BleuReport {
            precisions,
            candidate_len,
            closest_ref_len,
            brevity_penalty: bp,
            score,
        })
    }

    // Geometric mean over the orders the candidate is long enough to have.
    fn precision_score(&self, precisions: &[NgramPrecision]) -> f64 {
        if self.config.unigram_gate && precisions.first().is_some_and(|p| p.matches == 0) {
            return 0f64;
        }

        let epsilon = self.config.smoothing_epsilon;
        let included: Vec<f64> = precisions
            .iter()
            .filter_map(|p| p.smoothed(epsilon))
            .collect();

        // empty candidate
        if included.is_empty() {
            return 0f64;
        }

        // only reachable with epsilon == 0
        if included.iter().any(|&p| p <= 0f64) {
            return 0f64;
        }

        let weight = 1f64 / included.len() as f64;
        let log_sum: f64 = included.iter().map(|p| weight * p.ln()).sum();

        log_sum.exp()
    }
}

fn modified_precision<T, R>(candidate: &[T], references: &[R], n: usize) -> NgramPrecision
where
    T: Eq + Hash,
    R: AsRef<[T]>,
{
    let candidate_counts = ngram_counts(candidate, n);
    let max_counts = max_reference_counts(&candidate_counts, references, n);
    let matches = clipped_matches(&candidate_counts, &max_counts);

    tracing::debug!(order = n, matches, total = candidate_counts.count, "n-gram precision");

    NgramPrecision {
        order: n,
        matches,
        total: candidate_counts.count,
    }
}

/// Computes sentence BLEU with the default configuration
/// (orders 1..=4, uniform weights, epsilon 0.1).
///
/// # Arguments
///
/// * `candidate` - Token sequence to evaluate
/// * `references` - One or more ground-truth token sequences
///
/// # Returns
///
/// Score in [0, 1]: 1.0 = candidate equals a reference, 0.0 = empty candidate
///
/// # Errors
///
/// [`BleuError::InvalidInput`] if `references` is empty.
///
/// # Example
///
/// ```
/// use sentence_bleu::score;
///
/// let s = score(&[1, 2, 3, 4, 5], &[[1, 2, 3, 4, 5]]).unwrap();
/// assert_eq!(s, 1.0);
/// ```
pub fn score<T, R>(candidate: &[T], references: &[R]) -> Result<f64, BleuError>
where
    T: Eq + Hash,
    R: AsRef<[T]>,
{
    BleuScorer::default().score(candidate, references)
}

/// Computes BLEU between a candidate text and reference texts.
///
/// Texts are split on whitespace; words are compared by hash, folded to
/// lower case unless `case_sensitive` is set.
///
/// # Example
///
/// ```
/// use sentence_bleu::bleu_similarity;
///
/// let score = bleu_similarity(&["the cat sat"], "The Cat Sat", false).unwrap();
/// assert_eq!(score, 1.0);
/// ```
pub fn bleu_similarity(
    references: &[&str],
    candidate: &str,
    case_sensitive: bool,
) -> Result<f64, BleuError> {
    let reference_tokens: Vec<Vec<u64>> = references
        .iter()
        .map(|r| word_hashes(r, case_sensitive))
        .collect();
    let candidate_tokens = word_hashes(candidate, case_sensitive);

    score(&candidate_tokens, &reference_tokens)
}
