//! The content analyzer.
//!
//! [`Analyzer`] turns a [`ContentInput`] into an [`AnalysisResult`]:
//!
//! 1. Tokenize the text into lower-cased words (`N` words).
//! 2. Count non-overlapping occurrences of each distinct target keyword
//!    phrase in the token stream (`K` occurrences in total).
//! 3. Keyword density is `100 * K / N`.
//! 4. Detected keywords are the targets with at least one occurrence, in
//!    input order.
//! 5. The readability grade comes from average sentence and word length.
//! 6. The SEO score is the weighted sum of presence, density, length, and
//!    structure factors (see [`crate::scoring`]).
//! 7. Suggestions come from [`crate::suggest`].
//!
//! Analysis is a pure function of the input and the settings. Calling it
//! twice with the same arguments yields identical results.

use std::collections::HashSet;

use crate::error::AnalysisError;
use crate::models::{
    AnalysisResult, ContentInput, DetailedAnalysis, KeywordHit, Rating, TextMetrics,
};
use crate::readability;
use crate::scoring::{self, ScoreInputs};
use crate::settings::AnalysisSettings;
use crate::suggest;
use crate::tokenize;

/// Analyze with [`AnalysisSettings::default`].
pub fn analyze(input: &ContentInput) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::default().analyze(input)
}

/// Content analyzer bound to a fixed set of settings.
///
/// Holds no mutable state; share it behind an `Arc` and call it from any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    settings: AnalysisSettings,
}

impl Analyzer {
    /// Settings are assumed valid; see [`AnalysisSettings::validate`].
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn analyze(&self, input: &ContentInput) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_detailed(input).map(|d| d.result)
    }

    /// Like [`Analyzer::analyze`], also returning the metrics, per-keyword
    /// counts, and sub-scores that produced the result.
    pub fn analyze_detailed(&self, input: &ContentInput) -> Result<DetailedAnalysis, AnalysisError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let tokens = tokenize::words(text);
        let metrics = self.measure(text, &tokens);
        let keyword_hits = keyword_hits(&tokens, &input.target_keywords);

        let occurrences: usize = keyword_hits.iter().map(|h| h.occurrences).sum();
        let keyword_density = density(occurrences, tokens.len());

        let readability_grade =
            readability::grade_for_index(metrics.grade_level, &self.settings.grade_cutoffs);

        let detected_keywords: Vec<String> = keyword_hits
            .iter()
            .filter(|h| h.occurrences > 0)
            .map(|h| h.keyword.clone())
            .collect();

        let sub_scores = scoring::sub_scores(
            &ScoreInputs {
                distinct_targets: keyword_hits.len(),
                detected: detected_keywords.len(),
                density: keyword_density,
                word_count: metrics.word_count,
                heading_count: metrics.heading_count,
            },
            &self.settings,
        );

        let suggestions = suggest::suggestions(
            &metrics,
            readability_grade,
            keyword_density,
            &keyword_hits,
            &self.settings,
        );

        tracing::debug!(
            words = metrics.word_count,
            occurrences,
            density = keyword_density,
            grade = %readability_grade,
            score = sub_scores.total(),
            "content analyzed"
        );

        Ok(DetailedAnalysis {
            result: AnalysisResult {
                seo_score: sub_scores.total(),
                readability_grade,
                keyword_density,
                detected_keywords,
                suggestions,
            },
            metrics,
            keyword_hits,
            sub_scores,
        })
    }

    fn measure(&self, text: &str, tokens: &[String]) -> TextMetrics {
        let word_count = tokens.len();
        let sentence_count = if word_count == 0 {
            0
        } else {
            tokenize::sentence_count(text).max(1)
        };

        let (avg_sentence_length, avg_word_length, avg_syllables_per_word) = if word_count == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let chars: usize = tokens.iter().map(|w| w.chars().count()).sum();
            let syllables: usize = tokens.iter().map(|w| tokenize::syllables(w)).sum();
            (
                word_count as f64 / sentence_count as f64,
                chars as f64 / word_count as f64,
                syllables as f64 / word_count as f64,
            )
        };

        let flesch = readability::flesch_reading_ease(avg_sentence_length, avg_syllables_per_word);

        TextMetrics {
            word_count,
            sentence_count,
            heading_count: tokenize::heading_count(text),
            avg_sentence_length: round_to(avg_sentence_length, 1),
            avg_word_length: round_to(avg_word_length, 1),
            avg_syllables_per_word: round_to(avg_syllables_per_word, 2),
            flesch_reading_ease: round_to(flesch, 1),
            grade_level: round_to(
                readability::automated_readability_index(avg_word_length, avg_sentence_length),
                2,
            ),
            reading_level: readability::reading_level(flesch).to_string(),
            readability_status: Rating::for_flesch(flesch),
            word_count_status: Rating::for_word_count(
                word_count,
                self.settings.min_words,
                self.settings.max_words,
            ),
        }
    }
}

/// Count each distinct target keyword once, at its first position.
///
/// Keywords that contain no word characters are ignored.
fn keyword_hits(tokens: &[String], targets: &[String]) -> Vec<KeywordHit> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut hits = Vec::new();

    for keyword in targets {
        let phrase = tokenize::words(keyword);
        if phrase.is_empty() || !seen.insert(phrase.clone()) {
            continue;
        }
        hits.push(KeywordHit {
            keyword: keyword.clone(),
            occurrences: tokenize::count_phrase(tokens, &phrase),
        });
    }

    hits
}

fn density(occurrences: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    round_to(100.0 * occurrences as f64 / word_count as f64, 2)
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
