// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Assessment Error Types
 * Production-ready error handling with thiserror
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

/// Errors raised by the assessment surfaces. The analytics core itself is
/// infallible: empty selections, unknown framework ids and zero-applicable
/// edge cases all degrade to zeros or empty collections instead of failing.
#[derive(Error, Debug)]
pub enum AssessmentError {
    /// Dashboard or report requested before both selection steps completed
    #[error("No assessment data available")]
    IncompleteSelection,

    /// Report rendering errors
    #[error("Report error: {0}")]
    Report(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors (report files, control lists)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssessmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_selection_message() {
        let err = AssessmentError::IncompleteSelection;
        assert_eq!(err.to_string(), "No assessment data available");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let bad = serde_json::from_str::<crate::types::Selection>("{not json");
        let err: AssessmentError = bad.unwrap_err().into();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
