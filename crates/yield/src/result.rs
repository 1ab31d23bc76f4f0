//! Prediction output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use krishi_core::ValueObject;

use crate::advisory::{Locale, Recommendation, RiskFactor};
use crate::revenue::Revenue;
use crate::synthesis::YieldEstimate;
use crate::tables::YieldUnit;

/// The two intermediate factors behind an estimate.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub environmental: f64,
    pub practice: f64,
}

/// Result of one estimate. Immutable once produced.
///
/// The min/max pair is a fixed ±15% envelope, not a statistical interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    predicted_production_total: f64,
    yield_per_unit_area: f64,
    predicted_yield_min: f64,
    predicted_yield_max: f64,
    unit: YieldUnit,
    confidence_pct: u8,
    recommendations: Vec<Recommendation>,
    risk_factors: Vec<RiskFactor>,
    expected_harvest_date: NaiveDate,
    estimated_revenue: Revenue,
    multipliers: Multipliers,
}

impl ValueObject for PredictionResult {}

impl PredictionResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        estimate: YieldEstimate,
        unit: YieldUnit,
        confidence_pct: u8,
        recommendations: Vec<Recommendation>,
        risk_factors: Vec<RiskFactor>,
        expected_harvest_date: NaiveDate,
        estimated_revenue: Revenue,
        multipliers: Multipliers,
    ) -> Self {
        Self {
            predicted_production_total: estimate.total,
            yield_per_unit_area: estimate.per_area,
            predicted_yield_min: estimate.band.min,
            predicted_yield_max: estimate.band.max,
            unit,
            confidence_pct,
            recommendations,
            risk_factors,
            expected_harvest_date,
            estimated_revenue,
            multipliers,
        }
    }

    pub fn predicted_production_total(&self) -> f64 {
        self.predicted_production_total
    }

    pub fn yield_per_unit_area(&self) -> f64 {
        self.yield_per_unit_area
    }

    pub fn predicted_yield_min(&self) -> f64 {
        self.predicted_yield_min
    }

    pub fn predicted_yield_max(&self) -> f64 {
        self.predicted_yield_max
    }

    pub fn unit(&self) -> YieldUnit {
        self.unit
    }

    pub fn confidence_pct(&self) -> u8 {
        self.confidence_pct
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Advisory texts for one language, in rule order.
    pub fn recommendations_in(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.recommendations
            .iter()
            .filter(move |r| r.locale == locale)
            .map(|r| r.text.as_str())
    }

    pub fn risk_factors(&self) -> &[RiskFactor] {
        &self.risk_factors
    }

    pub fn expected_harvest_date(&self) -> NaiveDate {
        self.expected_harvest_date
    }

    pub fn estimated_revenue(&self) -> &Revenue {
        &self.estimated_revenue
    }

    pub fn multipliers(&self) -> Multipliers {
        self.multipliers
    }
}
