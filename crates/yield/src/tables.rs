//! Static lookup tables.
//!
//! Every lookup is an exhaustive match with an explicit default arm; unknown
//! keys are a designed fallback, not an error.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use krishi_core::DomainError;

use crate::crop::{Crop, Season};
use crate::practice::SoilType;

/// Which base-yield value set the engine uses.
///
/// The farming application historically carried two tables for the same
/// estimate. Both are kept; `Standard` is the default.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldTable {
    /// Tonnes per hectare.
    #[default]
    Standard,
    /// Quintals per acre.
    Legacy,
}

impl YieldTable {
    pub fn unit(self) -> YieldUnit {
        match self {
            YieldTable::Standard => YieldUnit::TonnesPerHectare,
            YieldTable::Legacy => YieldUnit::QuintalsPerAcre,
        }
    }

    pub fn default_base_yield(self) -> f64 {
        match self {
            YieldTable::Standard => STANDARD_DEFAULT_BASE_YIELD,
            YieldTable::Legacy => LEGACY_DEFAULT_BASE_YIELD,
        }
    }
}

impl FromStr for YieldTable {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(YieldTable::Standard),
            "legacy" => Ok(YieldTable::Legacy),
            other => Err(DomainError::invalid_field(
                "yield_table",
                format!("unknown table '{other}' (expected standard or legacy)"),
            )),
        }
    }
}

/// Unit of yield figures; area is in the matching unit (hectares or acres).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YieldUnit {
    TonnesPerHectare,
    QuintalsPerAcre,
}

impl YieldUnit {
    /// Quintals in one unit of production (1 tonne = 10 quintals).
    pub fn quintals_per_unit(self) -> f64 {
        match self {
            YieldUnit::TonnesPerHectare => 10.0,
            YieldUnit::QuintalsPerAcre => 1.0,
        }
    }
}

/// Tonnes per hectare for crops missing from the standard table.
pub const STANDARD_DEFAULT_BASE_YIELD: f64 = 2.0;
/// Quintals per acre for crops missing from the legacy table.
pub const LEGACY_DEFAULT_BASE_YIELD: f64 = 15.0;
/// Days to harvest for crops with no listed duration.
pub const DEFAULT_MATURITY_DAYS: u32 = 120;
/// INR per quintal.
pub const DEFAULT_MARKET_PRICE: f64 = 2000.0;

/// Nominal yield per unit area before any adjustment.
pub fn base_yield(table: YieldTable, crop: &Crop) -> f64 {
    let listed = match table {
        YieldTable::Standard => standard_base_yield(crop),
        YieldTable::Legacy => legacy_base_yield(crop),
    };
    listed.unwrap_or_else(|| table.default_base_yield())
}

fn standard_base_yield(crop: &Crop) -> Option<f64> {
    let t_per_ha = match crop {
        Crop::Rice => 2.5,
        Crop::Wheat => 3.0,
        Crop::Cotton => 1.5,
        Crop::Sugarcane => 70.0,
        Crop::Maize => 2.8,
        Crop::Bajra => 1.2,
        Crop::Jowar => 1.0,
        Crop::Moong => 0.8,
        Crop::Urad => 0.7,
        Crop::Arhar => 0.9,
        Crop::Groundnut => 1.5,
        Crop::Sunflower => 1.2,
        Crop::Soybean => 1.5,
        Crop::Potato => 20.0,
        Crop::Onion => 15.0,
        Crop::Tomato => 25.0,
        _ => return None,
    };
    Some(t_per_ha)
}

fn legacy_base_yield(crop: &Crop) -> Option<f64> {
    let q_per_acre = match crop {
        Crop::Rice => 25.0,
        Crop::Wheat => 20.0,
        Crop::Cotton => 12.0,
        Crop::Sugarcane => 350.0,
        Crop::Maize => 18.0,
        Crop::Soybean => 12.0,
        Crop::Groundnut => 15.0,
        Crop::Bajra => 10.0,
        Crop::Jowar => 8.0,
        Crop::Chickpea => 8.0,
        _ => return None,
    };
    Some(q_per_acre)
}

/// Days from planting to harvest. Only Rice depends on the season.
pub fn maturity_days(crop: &Crop, season: Season) -> u32 {
    match crop {
        Crop::Rice if season == Season::Kharif => 120,
        Crop::Rice => 150,
        Crop::Wheat => 120,
        Crop::Cotton => 180,
        Crop::Sugarcane => 365,
        Crop::Maize => 90,
        Crop::Bajra => 75,
        Crop::Jowar => 110,
        Crop::Moong => 70,
        Crop::Urad => 80,
        Crop::Arhar => 150,
        Crop::Chickpea => 100,
        Crop::Groundnut => 120,
        Crop::Sunflower => 100,
        Crop::Soybean => 100,
        Crop::Potato => 90,
        Crop::Onion => 120,
        Crop::Tomato => 75,
        Crop::Banana | Crop::Coconut => 365,
        Crop::Ragi | Crop::Other(_) => DEFAULT_MATURITY_DAYS,
    }
}

/// Crop/soil compatibility factor; 1.0 where no pairing is listed.
pub fn soil_compatibility(crop: &Crop, soil: &SoilType) -> f64 {
    match (crop, soil) {
        (Crop::Rice, SoilType::Clay) => 1.08,
        (Crop::Rice, SoilType::Loamy) => 1.10,
        (Crop::Rice, SoilType::Alluvial) => 1.12,

        (Crop::Wheat, SoilType::Loamy) => 1.10,
        (Crop::Wheat, SoilType::Alluvial) => 1.08,
        (Crop::Wheat, SoilType::Black) => 1.05,

        (Crop::Cotton, SoilType::Black) => 1.15,
        (Crop::Cotton, SoilType::Red) => 1.05,
        (Crop::Cotton, SoilType::Alluvial) => 1.08,

        (Crop::Sugarcane, SoilType::Clay) => 1.10,
        (Crop::Sugarcane, SoilType::Loamy) => 1.12,
        (Crop::Sugarcane, SoilType::Alluvial) => 1.08,

        _ => 1.0,
    }
}

/// Indicative mandi price in INR per quintal.
pub fn market_price_per_quintal(crop: &Crop) -> f64 {
    match crop {
        Crop::Rice => 1800.0,
        Crop::Wheat => 2000.0,
        Crop::Cotton => 5500.0,
        Crop::Sugarcane => 300.0,
        Crop::Maize => 1700.0,
        Crop::Soybean => 3800.0,
        Crop::Groundnut => 5000.0,
        Crop::Bajra => 1700.0,
        Crop::Jowar => 2500.0,
        Crop::Chickpea => 4500.0,
        _ => DEFAULT_MARKET_PRICE,
    }
}
