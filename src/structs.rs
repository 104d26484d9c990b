use std::fmt;

/// Number of tolerated edit errors at one bitap level.
pub type NumErrors = usize;

/// Default maximum acceptable score.
pub const DEFAULT_THRESHOLD: f64 = 0.5;
/// Default number of bytes of drift that add `1.0` to a score.
pub const DEFAULT_DISTANCE: usize = 1000;

/// Parameters that trade edit errors against positional drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// At what point no match is declared (`0.0` = exact only, `1.0` =
    /// accept anything).
    pub threshold: f64,
    /// How far from the expected location a match may stray. A match this
    /// many bytes away adds `1.0` to its score; `0` forbids any drift.
    pub distance: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
        }
    }
}

/// Immutable fuzzy locator. Build one with [`MatcherBuilder`](crate::MatcherBuilder)
/// or [`Matcher::new`] and share it freely; every call keeps its state local.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Matcher {
    pub(crate) config: MatcherConfig,
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("threshold", &self.config.threshold)
            .field("distance", &self.config.distance)
            .finish()
    }
}

/// How a [`Located`] result was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateKind {
    /// Text and pattern are identical.
    Identical,
    /// The pattern sits verbatim at the expected location.
    ExactAtLocation,
    /// Found by the bitap search.
    Fuzzy,
}

/// Result returned by [`Matcher::find`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    /// Byte offset of the match in the text.
    pub offset: usize,
    /// Score of the match; lower is better, `0.0` is perfect.
    pub score: f64,
    /// Which path produced the match.
    pub kind: LocateKind,
}
