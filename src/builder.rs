use crate::{ConfigError, Matcher, MatcherConfig};

/// Builder for [`Matcher`].
///
/// ```rust
/// use fuzzy_bitap::MatcherBuilder;
///
/// let matcher = MatcherBuilder::new()
///     .threshold(0.5)
///     .distance(100)
///     .build()
///     .unwrap();
///
/// assert_eq!(matcher.locate("abcdefghijk", "efxhi", 0), Some(4));
/// ```
#[derive(Debug, Default)]
pub struct MatcherBuilder {
    config: MatcherConfig,
}

impl MatcherBuilder {
    /// Start with the defaults: threshold `0.5`, distance `1000`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MatcherConfig::default(),
        }
    }

    /// Maximum acceptable score, in `[0.0, 1.0]`.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Bytes of drift from the expected location that cost a full `1.0` of score.
    #[must_use]
    pub fn distance(mut self, distance: usize) -> Self {
        self.config.distance = distance;
        self
    }

    /// Validates the configuration and builds an immutable [`Matcher`].
    pub fn build(self) -> Result<Matcher, ConfigError> {
        let threshold = self.config.threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(Matcher {
            config: self.config,
        })
    }
}

impl Matcher {
    /// Shorthand for `MatcherBuilder::new().threshold(threshold).distance(distance).build()`.
    pub fn new(threshold: f64, distance: usize) -> Result<Self, ConfigError> {
        MatcherBuilder::new()
            .threshold(threshold)
            .distance(distance)
            .build()
    }

    /// Builds a matcher from a ready-made [`MatcherConfig`], validating it first.
    pub fn with_config(config: MatcherConfig) -> Result<Self, ConfigError> {
        MatcherBuilder { config }.build()
    }

    /// The parameters this matcher was built with.
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }
}
