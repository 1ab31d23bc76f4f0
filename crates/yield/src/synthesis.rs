//! Yield synthesis: base yield × adjustments × area.

use serde::{Deserialize, Serialize};

use krishi_core::{DomainError, DomainResult, ValueObject};

const BAND_LOW: f64 = 0.85;
const BAND_HIGH: f64 = 1.15;

/// Fixed ±15% envelope around a production figure.
///
/// This is a heuristic width chosen by convention, **not** a statistical
/// confidence interval; it carries no probability statement.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldBand {
    pub min: f64,
    pub max: f64,
}

impl YieldBand {
    pub fn around(total: f64) -> Self {
        Self {
            min: total * BAND_LOW,
            max: total * BAND_HIGH,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Point estimate for a field.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// Production for the whole field.
    pub total: f64,
    /// Production per unit of area.
    pub per_area: f64,
    pub band: YieldBand,
}

impl ValueObject for YieldEstimate {}

/// Combine base yield, both multipliers and area.
///
/// Multipliers are positive by construction; the clamp keeps the non-negative
/// guarantee for degenerate factors (NaN or negative values become 0). An area
/// so large that the production band is not representable is rejected.
pub fn synthesize(
    base_yield: f64,
    area: f64,
    environmental: f64,
    practice: f64,
) -> DomainResult<YieldEstimate> {
    let per_area = non_negative(base_yield * environmental * practice);
    let total = per_area * area;
    if !(total * BAND_HIGH).is_finite() {
        return Err(DomainError::invalid_field(
            "area",
            "too large for a finite production estimate",
        ));
    }
    let total = non_negative(total);

    Ok(YieldEstimate {
        total,
        per_area,
        band: YieldBand::around(total),
    })
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
