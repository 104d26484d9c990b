//! Bit-parallel approximate search.
//!
//! Match state is kept in arbitrary-width [`BigUint`] vectors so the pattern
//! length is not bounded by a machine word. Bit `len - 1` stands for the
//! first pattern byte and bit `0` for the last, which means a completed match
//! shows up in the top bit of a column vector.

use crate::search::{backward_index_of, forward_index_of};
use crate::{Matcher, NumErrors};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Per-pattern map from byte to the bit positions it occupies in the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alphabet {
    masks: BTreeMap<u8, BigUint>,
}

impl Alphabet {
    pub(crate) fn new(pattern: &[u8]) -> Self {
        let mut masks: BTreeMap<u8, BigUint> = BTreeMap::new();
        let len = pattern.len();
        for (i, &byte) in pattern.iter().enumerate() {
            masks
                .entry(byte)
                .or_default()
                .set_bit((len - i - 1) as u64, true);
        }
        Self { masks }
    }

    #[inline]
    pub(crate) fn get(&self, byte: u8) -> Option<&BigUint> {
        self.masks.get(&byte)
    }
}

impl Matcher {
    /// Scores a match with `errors` edit errors found at `candidate` when it
    /// was expected at `loc`. Lower is better; `0.0` is an exact match in the
    /// expected place. For an empty pattern the accuracy term is `0.0`.
    ///
    /// ```rust
    /// use fuzzy_bitap::Matcher;
    ///
    /// let matcher = Matcher::new(0.5, 100).unwrap();
    /// assert_eq!(matcher.score(1, 10, 0, 4), 0.35);
    /// ```
    #[must_use]
    pub fn score(
        &self,
        errors: NumErrors,
        candidate: usize,
        loc: usize,
        pattern_len: usize,
    ) -> f64 {
        let accuracy = if pattern_len == 0 {
            0.0
        } else {
            errors as f64 / pattern_len as f64
        };
        let proximity = loc.abs_diff(candidate);
        if self.config.distance == 0 {
            // Any drift at all is as bad as it gets.
            return if proximity == 0 { accuracy } else { 1.0 };
        }
        accuracy + proximity as f64 / self.config.distance as f64
    }

    /// Locates the best instance of `pattern` in `text` near `loc`.
    ///
    /// Returns the offset together with its score. `pattern` must be non-empty
    /// and `loc` must already be clamped to `text.len()`.
    pub(crate) fn bitap_search(
        &self,
        text: &[u8],
        pattern: &[u8],
        loc: usize,
    ) -> Option<(usize, f64)> {
        debug_assert!(!pattern.is_empty());
        debug_assert!(loc <= text.len());
        let pattern_len = pattern.len();
        let alphabet = Alphabet::new(pattern);

        // Highest score beyond which we give up; tightened by nearby exact hits.
        let mut score_threshold = self.config.threshold;
        if let Some(exact) = forward_index_of(text, pattern, loc as isize) {
            score_threshold = score_threshold.min(self.score(0, exact, loc, pattern_len));
            if let Some(exact) = backward_index_of(text, pattern, (loc + pattern_len) as isize) {
                score_threshold = score_threshold.min(self.score(0, exact, loc, pattern_len));
            }
        }
        trace!("bitap: pattern_len={pattern_len} loc={loc} seed threshold={score_threshold:.4}");

        let one = BigUint::one();
        let mut match_mask = BigUint::zero();
        match_mask.set_bit((pattern_len - 1) as u64, true);

        let mut best: Option<(usize, f64)> = None;
        let mut bin_max = pattern_len + text.len();
        let mut last_rd: Vec<BigUint> = Vec::new();

        for d in 0..pattern_len {
            // How far from `loc` can a match stray at this error level?
            let mut bin_min = 0;
            let mut bin_mid = bin_max;
            while bin_min < bin_mid {
                if self.score(d, loc + bin_mid, loc, pattern_len) <= score_threshold {
                    bin_min = bin_mid;
                } else {
                    bin_max = bin_mid;
                }
                bin_mid = (bin_max - bin_min) / 2 + bin_min;
            }
            // The window only ever shrinks from one level to the next.
            bin_max = bin_mid;
            let mut start = (loc + 1).saturating_sub(bin_mid).max(1);
            let finish = (loc + bin_mid).min(text.len()) + pattern_len;
            trace!("bitap: d={d} window=[{start}, {finish}]");

            let mut rd = vec![BigUint::zero(); finish + 2];
            rd[finish + 1] = (BigUint::one() << d) - 1u32;

            let mut j = finish;
            while j >= start {
                let char_match = text.get(j - 1).and_then(|&byte| alphabet.get(byte));

                // Exact pass.
                let mut column = match char_match {
                    Some(mask) => ((&rd[j + 1] << 1u32) | &one) & mask,
                    None => BigUint::zero(),
                };
                if d > 0 {
                    // One more substitution, insertion or deletion on top of
                    // the previous level.
                    let prev = &last_rd[j + 1];
                    column |= (((prev | &last_rd[j]) << 1u32) | &one) | prev;
                }
                let complete = !(&column & &match_mask).is_zero();
                rd[j] = column;

                if complete {
                    let score = self.score(d, j - 1, loc, pattern_len);
                    if score <= score_threshold {
                        score_threshold = score;
                        let best_loc = j - 1;
                        best = Some((best_loc, score));
                        debug!("bitap: d={d} improved to {best_loc} (score {score:.4})");
                        if best_loc > loc {
                            // Don't stray further left of loc than we already are right of it.
                            start = (2 * loc).saturating_sub(best_loc).max(1);
                        } else {
                            // Already at or left of loc, every further column only drifts more.
                            break;
                        }
                    }
                }
                j -= 1;
            }

            if self.score(d + 1, loc, loc, pattern_len) > score_threshold {
                trace!("bitap: no better match possible beyond d={d}");
                break;
            }
            last_rd = rd;
        }
        best
    }
}
