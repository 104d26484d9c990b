use thiserror::Error;

/// Rejected matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("match threshold must be a finite number in [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),
}
