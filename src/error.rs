//! Error types for slug configuration

use thiserror::Error;

/// The error type for building a [`Slugifier`](crate::Slugifier)
///
/// Slugifying itself never fails; errors only surface when a [`SlugConfig`](crate::SlugConfig)
/// is turned into matchers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlugError {
    /// The allowed set or word separator produced a pattern the regex engine rejected
    #[error("Invalid slug policy: pattern {pattern:?} does not compile: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl SlugError {
    pub(crate) fn invalid_pattern(pattern: &str, err: &regex::Error) -> Self {
        SlugError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for slug configuration
pub type Result<T> = std::result::Result<T, SlugError>;
