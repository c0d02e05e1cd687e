//! Core data models for content analysis.
//!
//! [`ContentInput`] goes in, [`AnalysisResult`] comes out. The remaining
//! types carry the measurements behind a result for reports and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state of the submitted content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Draft,
    Published,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Draft => f.write_str("draft"),
            Source::Published => f.write_str("published"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Source::Draft),
            "published" => Ok(Source::Published),
            other => Err(format!(
                "unknown source '{}': expected draft or published",
                other
            )),
        }
    }
}

/// Blog text submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentInput {
    /// The blog body. Markdown or HTML headings count toward structure.
    pub text: String,
    /// Keywords or multi-word phrases to look for, in priority order.
    pub target_keywords: Vec<String>,
    pub source: Source,
}

impl ContentInput {
    pub fn new(text: impl Into<String>, target_keywords: Vec<String>) -> Self {
        Self {
            text: text.into(),
            target_keywords,
            source: Source::Draft,
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }
}

/// Ordinal readability label, best first.
///
/// The derived ordering follows declaration order, so `APlus < F`: a
/// grade that compares greater is a worse grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadabilityGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl ReadabilityGrade {
    /// All grades from best to worst.
    pub const ALL: [ReadabilityGrade; 8] = [
        ReadabilityGrade::APlus,
        ReadabilityGrade::A,
        ReadabilityGrade::BPlus,
        ReadabilityGrade::B,
        ReadabilityGrade::CPlus,
        ReadabilityGrade::C,
        ReadabilityGrade::D,
        ReadabilityGrade::F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadabilityGrade::APlus => "A+",
            ReadabilityGrade::A => "A",
            ReadabilityGrade::BPlus => "B+",
            ReadabilityGrade::B => "B",
            ReadabilityGrade::CPlus => "C+",
            ReadabilityGrade::C => "C",
            ReadabilityGrade::D => "D",
            ReadabilityGrade::F => "F",
        }
    }

    /// True when `self` is a strictly worse grade than `other`.
    pub fn is_worse_than(&self, other: ReadabilityGrade) -> bool {
        *self > other
    }
}

impl fmt::Display for ReadabilityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of analyzing one [`ContentInput`].
///
/// Field names are camelCase on the wire to match the HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Composite score in `0..=100`.
    pub seo_score: u8,
    pub readability_grade: ReadabilityGrade,
    /// Keyword occurrences as a percentage of all words, rounded to two decimals.
    pub keyword_density: f64,
    /// Target keywords found in the text, in input order.
    pub detected_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Qualitative band for displaying an SEO score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }
}

/// Four-step quality rating shared by length, readability, and catalog
/// keyword usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Acceptable,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Rating {
    /// Rate a word count against the configured target length.
    ///
    /// Excellent covers `min_words` up to the middle of the range. Good
    /// reaches down to 80% of `min_words` and up to 80% of the range;
    /// Acceptable down to 60% of `min_words` and up to `max_words`. The
    /// default 1000..=2000 range gives 1000-1500, 800-1800 and 600-2000.
    pub fn for_word_count(words: usize, min_words: usize, max_words: usize) -> Self {
        let span = max_words.saturating_sub(min_words);
        let excellent_max = min_words + span / 2;
        let good_max = min_words + span / 5 * 4;
        let good_min = min_words / 5 * 4;
        let acceptable_min = min_words / 5 * 3;

        if (min_words..=excellent_max).contains(&words) {
            Rating::Excellent
        } else if (good_min..=good_max).contains(&words) {
            Rating::Good
        } else if (acceptable_min..=max_words).contains(&words) {
            Rating::Acceptable
        } else {
            Rating::NeedsImprovement
        }
    }

    /// Rate a Flesch Reading Ease score; 60-70 (plain English) is best.
    pub fn for_flesch(score: f64) -> Self {
        if (60.0..=70.0).contains(&score) {
            Rating::Excellent
        } else if (50.0..=80.0).contains(&score) {
            Rating::Good
        } else if (40.0..=90.0).contains(&score) {
            Rating::Acceptable
        } else {
            Rating::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Acceptable => "Acceptable",
            Rating::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Raw text measurements behind an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub heading_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub avg_syllables_per_word: f64,
    /// Flesch Reading Ease, clamped to `0..=100`.
    pub flesch_reading_ease: f64,
    /// Automated Readability Index; drives the letter grade.
    pub grade_level: f64,
    pub reading_level: String,
    pub readability_status: Rating,
    pub word_count_status: Rating,
}

/// Occurrence count for one distinct target keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub occurrences: usize,
}

/// Weighted points per scoring factor.
///
/// The rounded, clamped sum of the four fields is the SEO score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub presence: f64,
    pub density: f64,
    pub length: f64,
    pub structure: f64,
}

impl SubScores {
    pub fn total(&self) -> u8 {
        let sum = self.presence + self.density + self.length + self.structure;
        sum.round().clamp(0.0, 100.0) as u8
    }
}

/// An [`AnalysisResult`] together with everything used to compute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub result: AnalysisResult,
    pub metrics: TextMetrics,
    pub keyword_hits: Vec<KeywordHit>,
    pub sub_scores: SubScores,
}
