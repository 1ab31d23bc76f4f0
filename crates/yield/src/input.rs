//! Normalized prediction input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use krishi_core::{DomainResult, InvalidInput, ValueObject};

use crate::crop::{Crop, CropCategory, Season};
use crate::environment::Environment;
use crate::practice::Practice;

/// Everything the engine needs for one estimate.
///
/// Assembled by the caller from farm records plus fresh provider readings,
/// passed to the engine once and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub crop: Crop,
    /// Informational only.
    pub crop_category: CropCategory,
    pub season: Season,
    /// Field area in the unit of the configured yield table (ha or acres).
    pub area: f64,
    pub planting_date: NaiveDate,
    pub environment: Environment,
    pub practice: Practice,
}

impl ValueObject for PredictionInput {}

impl PredictionInput {
    /// Check every numeric field, reporting all offenders at once.
    ///
    /// Out-of-range but physically possible readings (very hot, very dry, ...)
    /// are accepted; the engine degrades them through penalties.
    pub fn validate(&self) -> DomainResult<()> {
        let mut violations = InvalidInput::new();

        if matches!(&self.crop, Crop::Other(key) if key.trim().is_empty()) {
            violations.push("crop", "must not be blank");
        }

        if !self.area.is_finite() {
            violations.push("area", "must be a finite number");
        } else if self.area <= 0.0 {
            violations.push("area", "must be positive");
        }

        self.environment.collect_violations("environment", &mut violations);

        violations.into_result()
    }
}
