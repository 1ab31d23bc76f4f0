//! Farming-practice inputs and the practice adjustor.

use serde::{Deserialize, Serialize};

use krishi_core::ValueObject;

use crate::crop::Crop;
use crate::keyed::keyed_enum;
use crate::tables;

keyed_enum! {
    /// Soil type recorded on the farm profile.
    pub enum SoilType {
        Clay => "CLAY",
        Sandy => "SANDY",
        Loamy => "LOAMY",
        Black => "BLACK",
        Red => "RED",
        Alluvial => "ALLUVIAL",
        Laterite => "LATERITE",
        Mixed => "MIXED",
    }
}

keyed_enum! {
    /// Irrigation method recorded on the farm profile.
    pub enum IrrigationType {
        Drip => "DRIP",
        Sprinkler => "SPRINKLER",
        Flood => "FLOOD",
        Rainfed => "RAINFED",
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FertilizerType {
    Organic,
    Chemical,
    Mixed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeedQuality {
    High,
    Medium,
    Low,
}

/// How the crop is grown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    pub soil_type: SoilType,
    pub irrigation_type: IrrigationType,
    /// `None` when the farmer did not report a fertilizer regime.
    #[serde(default)]
    pub fertilizer_type: Option<FertilizerType>,
    pub seed_quality: SeedQuality,
}

impl ValueObject for Practice {}

/// Rainfed fields only take the dry-season penalty below this rainfall.
pub const RAINFED_MIN_RAINFALL_MM: f64 = 100.0;
const RAINFED_DRY_FACTOR: f64 = 0.85;

impl FertilizerType {
    pub fn yield_factor(self) -> f64 {
        match self {
            FertilizerType::Organic => 1.08,
            FertilizerType::Chemical => 1.12,
            FertilizerType::Mixed => 1.10,
        }
    }
}

impl SeedQuality {
    pub fn yield_factor(self) -> f64 {
        match self {
            SeedQuality::High => 1.15,
            SeedQuality::Medium => 1.05,
            SeedQuality::Low => 0.90,
        }
    }
}

impl IrrigationType {
    /// Rainfed fields depend on the season's rainfall, so it is an input here.
    pub fn yield_factor(&self, rainfall_mm: f64) -> f64 {
        match self {
            IrrigationType::Drip => 1.10,
            IrrigationType::Sprinkler => 1.07,
            IrrigationType::Flood => 1.02,
            IrrigationType::Rainfed if rainfall_mm < RAINFED_MIN_RAINFALL_MM => RAINFED_DRY_FACTOR,
            IrrigationType::Rainfed | IrrigationType::Other(_) => 1.0,
        }
    }
}

/// Combined practice multiplier.
///
/// Fertilizer, seed and irrigation factors compound in that order; the
/// crop/soil compatibility factor is applied last.
pub fn practice_multiplier(practice: &Practice, crop: &Crop, rainfall_mm: f64) -> f64 {
    let mut factor = 1.0;
    if let Some(fertilizer) = practice.fertilizer_type {
        factor *= fertilizer.yield_factor();
    }
    factor *= practice.seed_quality.yield_factor();
    factor *= practice.irrigation_type.yield_factor(rainfall_mm);
    factor *= tables::soil_compatibility(crop, &practice.soil_type);
    factor
}
