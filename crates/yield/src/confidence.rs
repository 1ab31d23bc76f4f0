//! Confidence scorer.
//!
//! Deliberately independent of the yield adjustors: its ranges overlap theirs
//! but are wider, and it scores in integer points rather than factors.

use crate::environment::Environment;
use crate::practice::{FertilizerType, Practice, SeedQuality};

pub const CONFIDENCE_BASE: i32 = 85;
pub const CONFIDENCE_MIN: u8 = 60;
pub const CONFIDENCE_MAX: u8 = 95;

/// Heuristic confidence in percent, clamped to `[60, 95]`.
///
/// Expresses how typical the input conditions are; it is not a probability.
pub fn confidence_score(env: &Environment, practice: &Practice) -> u8 {
    let mut score = CONFIDENCE_BASE;

    if env.temperature_c < 15.0 || env.temperature_c > 40.0 {
        score -= 10;
    }
    if env.rainfall_mm < 30.0 || env.rainfall_mm > 300.0 {
        score -= 10;
    }
    if env.soil_ph < 5.5 || env.soil_ph > 8.5 {
        score -= 5;
    }
    if env.nitrogen < 100.0 || env.nitrogen > 400.0 {
        score -= 5;
    }
    if practice.seed_quality == SeedQuality::Low {
        score -= 8;
    }
    if practice.fertilizer_type == Some(FertilizerType::Mixed) {
        score += 3;
    }

    // Bounded above, so the narrowing cast cannot truncate.
    score.clamp(i32::from(CONFIDENCE_MIN), i32::from(CONFIDENCE_MAX)) as u8
}
