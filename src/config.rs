//! Scoring knobs for [`BleuScorer`](crate::BleuScorer).

use crate::error::BleuError;

/// Highest n-gram order used when none is configured.
pub const DEFAULT_MAX_ORDER: usize = 4;

/// Numerator substituted for zero-match orders (smoothing method1).
pub const DEFAULT_SMOOTHING_EPSILON: f64 = 0.1;

/// Configuration for sentence-level BLEU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BleuConfig {
    /// N-gram orders `1..=max_order` are counted.
    pub max_order: usize,
    /// An order with zero clipped matches gets precision `epsilon / total`.
    /// Must lie in `[0, 1]` so a smoothed precision never exceeds 1.
    pub smoothing_epsilon: f64,
    /// Score 0 outright when no candidate unigram matches any reference.
    pub unigram_gate: bool,
}

impl Default for BleuConfig {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
            smoothing_epsilon: DEFAULT_SMOOTHING_EPSILON,
            unigram_gate: false,
        }
    }
}

impl BleuConfig {
    #[must_use]
    pub const fn new(max_order: usize, smoothing_epsilon: f64) -> Self {
        Self {
            max_order,
            smoothing_epsilon,
            unigram_gate: false,
        }
    }

    #[must_use]
    pub const fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    #[must_use]
    pub const fn with_smoothing_epsilon(mut self, smoothing_epsilon: f64) -> Self {
        self.smoothing_epsilon = smoothing_epsilon;
        self
    }

    /// Mirrors the native routine, which returns 0 before smoothing when the
    /// unigram numerator is zero.
    #[must_use]
    pub const fn with_unigram_gate(mut self, unigram_gate: bool) -> Self {
        self.unigram_gate = unigram_gate;
        self
    }

    pub fn validate(&self) -> Result<(), BleuError> {
        if self.max_order == 0 {
            return Err(BleuError::invalid_input("max_order must be at least 1"));
        }

        if !(0.0..=1.0).contains(&self.smoothing_epsilon) {
            return Err(BleuError::invalid_input(format!(
                "smoothing_epsilon must be within [0, 1], got {}",
                self.smoothing_epsilon
            )));
        }

        Ok(())
    }
}
