//! SEO score composition.
//!
//! Each factor yields a fraction in `[0, 1]` that is multiplied by its
//! weight from [`AnalysisSettings`]. Every factor is monotonic inside its
//! band, and the weights sum to 100, so the total stays in `0..=100`.

use crate::models::SubScores;
use crate::settings::AnalysisSettings;

/// Inputs to the score, already measured from the text.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub distinct_targets: usize,
    pub detected: usize,
    pub density: f64,
    pub word_count: usize,
    pub heading_count: usize,
}

/// Fraction of distinct target keywords that appear in the text.
pub fn presence_factor(detected: usize, distinct_targets: usize) -> f64 {
    if distinct_targets == 0 {
        return 0.0;
    }
    detected.min(distinct_targets) as f64 / distinct_targets as f64
}

/// Density factor: rises linearly up to `min`, holds at 1 through `max`,
/// then falls linearly to 0 at `2 * max`.
pub fn density_factor(density: f64, min: f64, max: f64) -> f64 {
    if density < min {
        if min <= 0.0 {
            1.0
        } else {
            (density / min).max(0.0)
        }
    } else if density <= max {
        1.0
    } else {
        (1.0 - (density - max) / max).max(0.0)
    }
}

/// Fraction of the recommended length reached, capped at 1.
pub fn length_factor(word_count: usize, min_words: usize) -> f64 {
    if min_words == 0 {
        return 1.0;
    }
    (word_count as f64 / min_words as f64).min(1.0)
}

/// Fraction of the recommended heading count reached, capped at 1.
pub fn structure_factor(heading_count: usize, min_headings: usize) -> f64 {
    if min_headings == 0 {
        return 1.0;
    }
    (heading_count as f64 / min_headings as f64).min(1.0)
}

pub fn sub_scores(inputs: &ScoreInputs, settings: &AnalysisSettings) -> SubScores {
    let density = if inputs.distinct_targets == 0 {
        0.0
    } else {
        density_factor(inputs.density, settings.density_min, settings.density_max)
    };

    SubScores {
        presence: settings.presence_weight as f64
            * presence_factor(inputs.detected, inputs.distinct_targets),
        density: settings.density_weight as f64 * density,
        length: settings.length_weight as f64
            * length_factor(inputs.word_count, settings.min_words),
        structure: settings.structure_weight as f64
            * structure_factor(inputs.heading_count, settings.min_headings),
    }
}
