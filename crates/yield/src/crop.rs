//! Crop, crop category and growing season.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use krishi_core::DomainError;

use crate::keyed::keyed_enum;

keyed_enum! {
    /// Crop key into the lookup tables.
    ///
    /// Keys match the farm records' spelling ("Rice", "Wheat", ...) but are
    /// parsed case-insensitively. Unknown crops are still estimated, using the
    /// table defaults.
    pub enum Crop {
        Rice => "Rice",
        Wheat => "Wheat",
        Cotton => "Cotton",
        Sugarcane => "Sugarcane",
        Maize => "Maize",
        Bajra => "Bajra",
        Jowar => "Jowar",
        Ragi => "Ragi",
        Moong => "Moong",
        Urad => "Urad",
        Arhar => "Arhar",
        Chickpea => "Chickpea",
        Groundnut => "Groundnut",
        Sunflower => "Sunflower",
        Soybean => "Soybean",
        Potato => "Potato",
        Onion => "Onion",
        Tomato => "Tomato",
        Banana => "Banana",
        Coconut => "Coconut",
    }
}

impl Crop {
    /// Conventional category for the crop (callers may record a different one).
    pub fn category(&self) -> CropCategory {
        match self {
            Crop::Rice | Crop::Wheat | Crop::Maize | Crop::Bajra | Crop::Jowar | Crop::Ragi => {
                CropCategory::Cereals
            }
            Crop::Moong | Crop::Urad | Crop::Arhar | Crop::Chickpea => CropCategory::Pulses,
            Crop::Groundnut | Crop::Sunflower | Crop::Soybean => CropCategory::Oilseeds,
            Crop::Cotton | Crop::Sugarcane => CropCategory::CashCrops,
            Crop::Potato | Crop::Onion | Crop::Tomato => CropCategory::Vegetables,
            Crop::Banana | Crop::Coconut => CropCategory::Fruits,
            Crop::Other(_) => CropCategory::Other,
        }
    }
}

/// Informational crop grouping; does not influence the estimate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CropCategory {
    Cereals,
    Pulses,
    Oilseeds,
    CashCrops,
    Vegetables,
    Fruits,
    Other,
}

/// Indian cropping season.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Season {
    /// Monsoon crop, sown June-October.
    Kharif,
    /// Winter crop, sown November-March.
    Rabi,
    /// Short summer crop, April-May.
    Zaid,
    WholeYear,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::WholeYear => "WholeYear",
        }
    }

    /// Season implied by the planting month.
    ///
    /// June-October is Kharif, November-March is Rabi, April-May is Zaid.
    /// `WholeYear` is never inferred.
    pub fn from_planting_date(date: NaiveDate) -> Self {
        match date.month() {
            6..=10 => Season::Kharif,
            4 | 5 => Season::Zaid,
            _ => Season::Rabi,
        }
    }
}

impl core::fmt::Display for Season {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "kharif" => Ok(Season::Kharif),
            "rabi" => Ok(Season::Rabi),
            "zaid" => Ok(Season::Zaid),
            "wholeyear" => Ok(Season::WholeYear),
            _ => Err(DomainError::invalid_field(
                "season",
                format!("unknown season '{s}' (expected Kharif, Rabi, Zaid or Whole Year)"),
            )),
        }
    }
}

impl TryFrom<String> for Season {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Season> for &'static str {
    fn from(value: Season) -> Self {
        value.as_str()
    }
}
