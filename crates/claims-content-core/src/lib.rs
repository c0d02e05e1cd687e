//! # Claims Content Core
//!
//! Pure analysis logic for Claims Content: data models, tokenizer,
//! readability heuristics, SEO scoring, suggestion rules, and keyword
//! catalog parsing.
//!
//! This crate performs no I/O and pulls in no async runtime. Every
//! function is deterministic over its arguments, so an [`Analyzer`] can be
//! shared across threads and called concurrently without coordination.
//!
//! # Example
//!
//! ```rust
//! use claims_content_core::{analyze, ContentInput};
//!
//! let input = ContentInput::new(
//!     "Storm damage claims need photos. File storm damage claims early.",
//!     vec!["storm damage".to_string()],
//! );
//! let result = analyze(&input).unwrap();
//! assert_eq!(result.detected_keywords, vec!["storm damage"]);
//! assert!(result.seo_score <= 100);
//! ```

pub mod analyzer;
pub mod catalog;
pub mod error;
pub mod models;
pub mod readability;
pub mod scoring;
pub mod settings;
pub mod suggest;
pub mod tokenize;

pub use analyzer::{analyze, Analyzer};
pub use catalog::{Category, CategoryUsage, KeywordCatalog, KeywordUsage};
pub use error::{AnalysisError, SettingsError};
pub use models::{
    AnalysisResult, ContentInput, DetailedAnalysis, KeywordHit, ReadabilityGrade, ScoreBand,
    Rating, Source, SubScores, TextMetrics,
};
pub use settings::AnalysisSettings;
