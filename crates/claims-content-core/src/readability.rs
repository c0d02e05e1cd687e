//! Readability heuristics.
//!
//! The letter grade comes from the Automated Readability Index, which
//! depends only on average sentence length and average word length and
//! increases with both. Grade cut-offs are ascending, so shorter sentences
//! or shorter words can never produce a worse grade.
//!
//! Flesch Reading Ease is reported alongside for editors used to that
//! scale; it does not affect the grade.

use crate::models::ReadabilityGrade;

/// Automated Readability Index (approximate US school grade).
pub fn automated_readability_index(avg_word_length: f64, avg_sentence_length: f64) -> f64 {
    4.71 * avg_word_length + 0.5 * avg_sentence_length - 21.43
}

/// Map a readability index onto the letter scale.
///
/// `cutoffs[i]` is the highest index still awarded `ReadabilityGrade::ALL[i]`;
/// anything above the last cut-off is `F`.
pub fn grade_for_index(index: f64, cutoffs: &[f64; 7]) -> ReadabilityGrade {
    cutoffs
        .iter()
        .position(|&limit| index <= limit)
        .map(|i| ReadabilityGrade::ALL[i])
        .unwrap_or(ReadabilityGrade::F)
}

/// Flesch Reading Ease, clamped to `0..=100`.
pub fn flesch_reading_ease(avg_sentence_length: f64, avg_syllables_per_word: f64) -> f64 {
    let score = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    score.clamp(0.0, 100.0)
}

/// Audience label for a Flesch score.
pub fn reading_level(flesch: f64) -> &'static str {
    if flesch >= 90.0 {
        "5th grade (Very easy to read)"
    } else if flesch >= 80.0 {
        "6th grade (Easy to read)"
    } else if flesch >= 70.0 {
        "7th grade (Fairly easy to read)"
    } else if flesch >= 60.0 {
        "8th-9th grade (Plain English)"
    } else if flesch >= 50.0 {
        "10th-12th grade (Fairly difficult)"
    } else if flesch >= 30.0 {
        "College (Difficult)"
    } else {
        "College graduate (Very difficult)"
    }
}
