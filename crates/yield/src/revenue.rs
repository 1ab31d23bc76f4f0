//! Indicative revenue for a production estimate.

use serde::{Deserialize, Serialize};

use crate::crop::Crop;
use crate::tables::{self, YieldUnit};

pub const CURRENCY: &str = "INR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    /// Whole rupees, rounded to nearest.
    pub amount: u64,
    pub price_per_quintal: f64,
    pub currency: String,
}

/// Production converted to quintals and priced at the crop's market rate.
pub fn estimate_revenue(total: f64, unit: YieldUnit, crop: &Crop) -> Revenue {
    let price_per_quintal = tables::market_price_per_quintal(crop);
    let quintals = total * unit.quintals_per_unit();
    // Float-to-int casts saturate; total is already clamped to >= 0.
    let amount = (quintals * price_per_quintal).round() as u64;

    Revenue {
        amount,
        price_per_quintal,
        currency: CURRENCY.to_string(),
    }
}
