//! Tunable analysis constants.
//!
//! Every field has a default, so a partial `[analysis]` TOML table
//! deserializes cleanly. Call [`AnalysisSettings::validate`] before use.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Points for target keywords being present at all.
    pub presence_weight: u32,
    /// Points for keyword density inside the ideal band.
    pub density_weight: u32,
    /// Points for reaching `min_words`.
    pub length_weight: u32,
    /// Points for reaching `min_headings`.
    pub structure_weight: u32,
    /// Lower edge of the ideal keyword density band, in percent.
    pub density_min: f64,
    /// Upper edge of the ideal keyword density band, in percent.
    pub density_max: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub min_headings: usize,
    /// Highest readability index awarded A+, A, B+, B, C+, C, D.
    pub grade_cutoffs: [f64; 7],
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            presence_weight: 30,
            density_weight: 30,
            length_weight: 25,
            structure_weight: 15,
            density_min: 1.0,
            density_max: 3.0,
            min_words: 1000,
            max_words: 2000,
            min_headings: 2,
            grade_cutoffs: [6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 14.0],
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let sum: u64 = [
            self.presence_weight,
            self.density_weight,
            self.length_weight,
            self.structure_weight,
        ]
        .iter()
        .map(|&w| u64::from(w))
        .sum();
        if sum != 100 {
            return Err(SettingsError::WeightSum(sum));
        }

        if !(self.density_min >= 0.0 && self.density_min < self.density_max) {
            return Err(SettingsError::DensityBand {
                min: self.density_min.to_string(),
                max: self.density_max.to_string(),
            });
        }

        if self.min_words == 0 {
            return Err(SettingsError::ZeroMinWords);
        }
        if self.max_words < self.min_words {
            return Err(SettingsError::WordRange {
                min: self.min_words,
                max: self.max_words,
            });
        }

        if self.min_headings == 0 {
            return Err(SettingsError::ZeroMinHeadings);
        }

        if self.grade_cutoffs.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(SettingsError::GradeCutoffs);
        }

        Ok(())
    }
}
