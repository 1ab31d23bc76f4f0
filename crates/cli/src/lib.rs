//! `krishi-estimate` command-line entry point.
//!
//! Reads one `PredictionInput` as JSON, runs it through the prediction
//! boundary and writes the prediction as pretty JSON.

pub mod config;

use std::io::{Read, Write};

use anyhow::Context;
use tracing::info;

use krishi_ai::FallbackPredictor;
use krishi_yield::{PredictionInput, YieldEngine};

pub use config::Config;

/// Estimate one input read from `reader`, writing the prediction to `writer`.
pub fn run(config: &Config, reader: impl Read, mut writer: impl Write) -> anyhow::Result<()> {
    let input: PredictionInput =
        serde_json::from_reader(reader).context("failed to parse prediction input JSON")?;

    // No trained model is wired into the CLI; every request uses the engine.
    let predictor = FallbackPredictor::new(YieldEngine::new(config.engine));
    let prediction = predictor.run(&input).context("prediction failed")?;

    info!(
        crop = %input.crop,
        source = ?prediction.source,
        total = prediction.result.predicted_production_total(),
        confidence = prediction.result.confidence_pct(),
        "prediction complete"
    );

    serde_json::to_writer_pretty(&mut writer, &prediction).context("failed to write prediction")?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const INPUT: &str = r#"{
        "crop": "Wheat",
        "crop_category": "CEREALS",
        "season": "Rabi",
        "area": 2.0,
        "planting_date": "2024-11-10",
        "environment": {
            "temperature_c": 25.0, "rainfall_mm": 150.0, "humidity_pct": 60.0,
            "soil_ph": 6.8, "nitrogen": 250.0, "phosphorus": 40.0, "potassium": 220.0
        },
        "practice": {
            "soil_type": "LOAMY", "irrigation_type": "DRIP",
            "fertilizer_type": "MIXED", "seed_quality": "HIGH"
        }
    }"#;

    #[test]
    fn writes_heuristic_prediction_as_json() {
        let mut out = Vec::new();
        run(&Config::default(), INPUT.as_bytes(), &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["source"], "heuristic");
        assert_eq!(value["result"]["confidence_pct"], 88);
        assert_eq!(value["result"]["unit"], "TONNES_PER_HECTARE");
    }

    #[test]
    fn legacy_table_changes_the_unit() {
        let config = Config::from_lookup(|key| match key {
            "KRISHI_YIELD_TABLE" => Some("legacy".to_string()),
            _ => None,
        })
        .unwrap();

        let mut out = Vec::new();
        run(&config, INPUT.as_bytes(), &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["result"]["unit"], "QUINTALS_PER_ACRE");
    }

    #[test]
    fn malformed_json_reports_context() {
        let err = run(&Config::default(), "{ not json".as_bytes(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("failed to parse prediction input JSON"));
    }

    #[test]
    fn invalid_area_is_reported() {
        let input = INPUT.replace("\"area\": 2.0", "\"area\": 0.0");
        let err = run(&Config::default(), input.as_bytes(), Vec::new()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("area: must be positive"), "{chain}");
    }
}
