//! Error types for content analysis.

use thiserror::Error;

/// Failure of a single analysis.
///
/// Empty input is the only expected failure: the caller corrects it by
/// resubmitting non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The text was empty or contained only whitespace.
    #[error("content must not be empty")]
    EmptyInput,
}

/// Rejected [`AnalysisSettings`](crate::AnalysisSettings).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("score weights must sum to 100, got {0}")]
    WeightSum(u64),

    #[error("density band is invalid: min {min} must be >= 0 and below max {max}")]
    DensityBand { min: String, max: String },

    #[error("analysis.min_words must be > 0")]
    ZeroMinWords,

    #[error("analysis.max_words ({max}) must be >= analysis.min_words ({min})")]
    WordRange { min: usize, max: usize },

    #[error("analysis.min_headings must be > 0")]
    ZeroMinHeadings,

    #[error("analysis.grade_cutoffs must be strictly ascending")]
    GradeCutoffs,
}
