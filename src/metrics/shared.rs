use std::hash::Hash;

use rustc_hash::FxHashMap;

/// N-gram multiplicities of a single sequence, keyed by the window itself.
pub(crate) type NgramMap<'a, T> = FxHashMap<&'a [T], usize>;

pub(crate) struct NgramCounts<'a, T> {
    pub(crate) ngram_counts: NgramMap<'a, T>,
    pub(crate) count: usize,
}

// Windows are compared token by token, so distinct n-grams never collide.
pub(crate) fn ngram_counts<T: Eq + Hash>(tokens: &[T], n: usize) -> NgramCounts<'_, T> {
    let mut ngram_counts = NgramMap::default();
    let mut count = 0;

    if n == 0 || tokens.len() < n {
        return NgramCounts { ngram_counts, count };
    }

    for window in tokens.windows(n) {
        *ngram_counts.entry(window).or_insert(0) += 1;
        count += 1;
    }

    NgramCounts { ngram_counts, count }
}

// For every candidate n-gram, the highest count it reaches in any one reference.
// References are not summed: a gram seen twice across two references still clips at 1.
pub(crate) fn max_reference_counts<'c, T, R>(
    candidate: &NgramCounts<'c, T>,
    references: &[R],
    n: usize,
) -> NgramMap<'c, T>
where
    T: Eq + Hash,
    R: AsRef<[T]>,
{
    let mut max_counts: NgramMap<'c, T> = candidate
        .ngram_counts
        .keys()
        .map(|&ngram| (ngram, 0))
        .collect();

    if max_counts.is_empty() {
        return max_counts;
    }

    for reference in references {
        let reference_counts = ngram_counts(reference.as_ref(), n);

        for (ngram, max) in max_counts.iter_mut() {
            if let Some(&rc) = reference_counts.ngram_counts.get(*ngram) {
                *max = (*max).max(rc);
            }
        }
    }

    max_counts
}

pub(crate) fn clipped_matches<T: Eq + Hash>(
    candidate: &NgramCounts<'_, T>,
    max_counts: &NgramMap<'_, T>,
) -> usize {
    let mut matches = 0;

    for (ngram, c) in &candidate.ngram_counts {
        if let Some(mc) = max_counts.get(*ngram) {
            matches += (*c).min(*mc);
        }
    }

    matches
}
