//! Environmental readings and the environmental adjustor.

use serde::{Deserialize, Serialize};

use krishi_core::{InvalidInput, ValueObject};

/// Weather and soil readings for the growing season.
///
/// Values come from the weather/soil providers (or their documented defaults);
/// the engine does not fetch or default them itself.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub humidity_pct: f64,
    pub soil_ph: f64,
    /// Available nitrogen, kg/ha.
    pub nitrogen: f64,
    /// Available phosphorus, kg/ha.
    pub phosphorus: f64,
    /// Available potassium, kg/ha.
    pub potassium: f64,
}

impl ValueObject for Environment {}

impl Environment {
    /// Record non-finite and negative readings.
    pub(crate) fn collect_violations(&self, prefix: &str, violations: &mut InvalidInput) {
        let readings = [
            ("temperature_c", self.temperature_c),
            ("rainfall_mm", self.rainfall_mm),
            ("humidity_pct", self.humidity_pct),
            ("soil_ph", self.soil_ph),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
        ];

        for (name, value) in readings {
            if !value.is_finite() {
                violations.push(format!("{prefix}.{name}"), "must be a finite number");
            } else if value < 0.0 {
                violations.push(format!("{prefix}.{name}"), "must not be negative");
            }
        }
    }
}

// Safe bands for yield. Readings exactly on a bound are inside the band.
const TEMP_MIN_C: f64 = 20.0;
const TEMP_MAX_C: f64 = 35.0;
const RAINFALL_DRY_MM: f64 = 50.0;
const RAINFALL_WET_MM: f64 = 300.0;
const HUMIDITY_DRY_PCT: f64 = 40.0;
const HUMIDITY_WET_PCT: f64 = 85.0;
const PH_MIN: f64 = 6.0;
const PH_MAX: f64 = 7.5;
const NITROGEN_MIN: f64 = 150.0;
const PHOSPHORUS_MIN: f64 = 30.0;
const POTASSIUM_MIN: f64 = 200.0;

/// Compound environmental multiplier.
///
/// Starts at 1.0; each rule below is evaluated and multiplies in its penalty.
/// There is no floor: several penalties can push the factor well below 0.5.
pub fn environmental_multiplier(env: &Environment) -> f64 {
    let mut factor = 1.0;

    if env.temperature_c < TEMP_MIN_C || env.temperature_c > TEMP_MAX_C {
        factor *= 0.90;
    }

    if env.rainfall_mm < RAINFALL_DRY_MM {
        factor *= 0.85;
    } else if env.rainfall_mm > RAINFALL_WET_MM {
        factor *= 0.92;
    }

    if env.humidity_pct < HUMIDITY_DRY_PCT {
        factor *= 0.93;
    } else if env.humidity_pct > HUMIDITY_WET_PCT {
        factor *= 0.95;
    }

    if env.soil_ph < PH_MIN || env.soil_ph > PH_MAX {
        factor *= 0.90;
    }
    if env.nitrogen < NITROGEN_MIN {
        factor *= 0.90;
    }
    if env.phosphorus < PHOSPHORUS_MIN {
        factor *= 0.93;
    }
    if env.potassium < POTASSIUM_MIN {
        factor *= 0.93;
    }

    factor
}
