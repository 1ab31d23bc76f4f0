//! Upstream weather/soil readings and their documented defaults.

use serde::{Deserialize, Serialize};

use krishi_core::ValueObject;
use krishi_yield::Environment;

use crate::error::ProviderError;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions from a weather provider. Any field may be missing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: Option<f64>,
    pub rainfall_mm: Option<f64>,
    pub humidity_pct: Option<f64>,
}

impl ValueObject for WeatherReading {}

/// Soil test values from a soil provider. Any field may be missing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    pub ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
}

impl ValueObject for SoilReading {}

/// Source of weather readings for a location.
///
/// Implementations own their transport, timeouts and retries.
pub trait WeatherProvider: Send + Sync {
    fn weather(&self, location: &Location) -> Result<WeatherReading, ProviderError>;
}

/// Source of soil readings for a location.
pub trait SoilProvider: Send + Sync {
    fn soil(&self, location: &Location) -> Result<SoilReading, ProviderError>;
}

/// Values substituted for readings that are unavailable.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingDefaults {
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub humidity_pct: f64,
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl Default for ReadingDefaults {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            rainfall_mm: 100.0,
            humidity_pct: 70.0,
            soil_ph: 6.5,
            nitrogen: 50.0,
            phosphorus: 50.0,
            potassium: 50.0,
        }
    }
}

impl ReadingDefaults {
    /// Merge provider readings over the defaults.
    ///
    /// Weather values are taken whenever present and finite (0 mm rain is a
    /// real reading). Soil providers report 0 for "no data", so a zero soil
    /// value is treated as missing.
    pub fn environment(&self, weather: &WeatherReading, soil: &SoilReading) -> Environment {
        Environment {
            temperature_c: reading(weather.temperature_c, self.temperature_c),
            rainfall_mm: reading(weather.rainfall_mm, self.rainfall_mm),
            humidity_pct: reading(weather.humidity_pct, self.humidity_pct),
            soil_ph: soil_value(soil.ph, self.soil_ph),
            nitrogen: soil_value(soil.nitrogen, self.nitrogen),
            phosphorus: soil_value(soil.phosphorus, self.phosphorus),
            potassium: soil_value(soil.potassium, self.potassium),
        }
    }
}

fn reading(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

fn soil_value(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v != 0.0).unwrap_or(default)
}
