//! Rule-based improvement suggestions.
//!
//! Rules fire in a fixed group order: length, keyword density, missing
//! keywords, structure, readability. Within the missing-keyword group the
//! order follows the caller's keyword list.

use crate::models::{KeywordHit, ReadabilityGrade, TextMetrics};
use crate::settings::AnalysisSettings;

/// Grades worse than this trigger a readability suggestion.
const READABILITY_FLOOR: ReadabilityGrade = ReadabilityGrade::B;

pub fn suggestions(
    metrics: &TextMetrics,
    grade: ReadabilityGrade,
    density: f64,
    hits: &[KeywordHit],
    settings: &AnalysisSettings,
) -> Vec<String> {
    let mut out = Vec::new();

    // Length
    if metrics.word_count < settings.min_words {
        out.push(format!(
            "Add more content to reach recommended length ({} of {} words)",
            metrics.word_count, settings.min_words
        ));
    } else if metrics.word_count > settings.max_words {
        out.push(format!(
            "Consider splitting content into multiple posts ({} words exceeds {})",
            metrics.word_count, settings.max_words
        ));
    }

    // Density
    let total_occurrences: usize = hits.iter().map(|h| h.occurrences).sum();
    if hits.is_empty() {
        out.push("Specify target keywords to measure keyword usage".to_string());
    } else if density > settings.density_max {
        out.push(format!(
            "Reduce keyword repetition (density {:.2}% exceeds {:.1}%)",
            density, settings.density_max
        ));
    } else if density < settings.density_min && total_occurrences > 0 {
        out.push(format!(
            "Use target keywords more often (density {:.2}% is below {:.1}%)",
            density, settings.density_min
        ));
    }

    // Missing keywords
    for hit in hits.iter().filter(|h| h.occurrences == 0) {
        out.push(format!(
            "Target keyword not found in content: \"{}\"",
            hit.keyword
        ));
    }

    // Structure
    if metrics.heading_count == 0 {
        out.push("Add headings to break the content into sections".to_string());
    } else if metrics.heading_count < settings.min_headings {
        out.push(format!(
            "Add more subheadings ({} of {} recommended)",
            metrics.heading_count, settings.min_headings
        ));
    }

    if grade.is_worse_than(READABILITY_FLOOR) {
        out.push("Shorten sentences and use simpler words to improve readability".to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;

    fn metrics(word_count: usize, heading_count: usize) -> TextMetrics {
        TextMetrics {
            word_count,
            sentence_count: 1,
            heading_count,
            avg_sentence_length: word_count as f64,
            avg_word_length: 5.0,
            avg_syllables_per_word: 1.5,
            flesch_reading_ease: 60.0,
            grade_level: 8.0,
            reading_level: "8th-9th grade (Plain English)".to_string(),
            readability_status: Rating::for_flesch(60.0),
            word_count_status: Rating::for_word_count(word_count, 1000, 2000),
        }
    }

    fn hit(keyword: &str, occurrences: usize) -> KeywordHit {
        KeywordHit {
            keyword: keyword.to_string(),
            occurrences,
        }
    }

    #[test]
    fn test_group_order() {
        let hits = vec![hit("storm damage", 0), hit("claims", 40), hit("adjuster", 0)];
        let out = suggestions(
            &metrics(200, 0),
            ReadabilityGrade::D,
            20.0,
            &hits,
            &AnalysisSettings::default(),
        );
        assert_eq!(out.len(), 6);
        assert!(out[0].starts_with("Add more content to reach recommended length"));
        assert!(out[1].starts_with("Reduce keyword repetition"));
        assert_eq!(out[2], "Target keyword not found in content: \"storm damage\"");
        assert_eq!(out[3], "Target keyword not found in content: \"adjuster\"");
        assert!(out[4].starts_with("Add headings"));
        assert!(out[5].contains("readability"));
    }

    #[test]
    fn test_clean_content_has_no_suggestions() {
        let hits = vec![hit("claims", 20)];
        let out = suggestions(
            &metrics(1200, 3),
            ReadabilityGrade::A,
            1.7,
            &hits,
            &AnalysisSettings::default(),
        );
        assert!(out.is_empty(), "unexpected suggestions: {:?}", out);
    }

    #[test]
    fn test_no_targets_prompts_for_keywords() {
        let out = suggestions(
            &metrics(1200, 3),
            ReadabilityGrade::A,
            0.0,
            &[],
            &AnalysisSettings::default(),
        );
        assert_eq!(out, vec!["Specify target keywords to measure keyword usage"]);
    }

    #[test]
    fn test_low_density_only_when_some_occurrences() {
        let settings = AnalysisSettings::default();
        let out = suggestions(&metrics(1200, 3), ReadabilityGrade::A, 0.0, &[hit("x", 0)], &settings);
        assert!(!out.iter().any(|s| s.starts_with("Use target keywords more often")));

        let out = suggestions(&metrics(1200, 3), ReadabilityGrade::A, 0.5, &[hit("x", 6)], &settings);
        assert!(out[0].starts_with("Use target keywords more often"));
    }

    #[test]
    fn test_too_long_and_single_heading() {
        let out = suggestions(
            &metrics(2500, 1),
            ReadabilityGrade::B,
            2.0,
            &[hit("x", 50)],
            &AnalysisSettings::default(),
        );
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("Consider splitting content"));
        assert_eq!(out[1], "Add more subheadings (1 of 2 recommended)");
    }
}
