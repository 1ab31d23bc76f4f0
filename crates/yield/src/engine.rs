//! The estimate pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use krishi_core::DomainResult;

use crate::advisory;
use crate::confidence::confidence_score;
use crate::environment::environmental_multiplier;
use crate::harvest::harvest_date;
use crate::input::PredictionInput;
use crate::practice::practice_multiplier;
use crate::result::{Multipliers, PredictionResult};
use crate::revenue::estimate_revenue;
use crate::synthesis::synthesize;
use crate::tables::{self, YieldTable};

/// Engine configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base-yield value set; also fixes the unit of area and production.
    #[serde(default)]
    pub table: YieldTable,
}

/// Deterministic heuristic yield estimator.
///
/// Holds configuration only, so it is `Copy` and can be shared freely across
/// threads; `estimate` is a pure function of the input.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct YieldEngine {
    config: EngineConfig,
}

impl YieldEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_table(table: YieldTable) -> Self {
        Self::new(EngineConfig { table })
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Estimate yield, confidence, harvest date and advisories for one field.
    ///
    /// Fails only on malformed input (`DomainError::InvalidInput`); unknown
    /// crops, soils and irrigation methods fall back to table defaults.
    pub fn estimate(&self, input: &PredictionInput) -> DomainResult<PredictionResult> {
        input.validate()?;

        let env = &input.environment;
        let environmental = environmental_multiplier(env);
        let practice = practice_multiplier(&input.practice, &input.crop, env.rainfall_mm);
        let base = tables::base_yield(self.config.table, &input.crop);
        let estimate = synthesize(base, input.area, environmental, practice)?;

        let confidence = confidence_score(env, &input.practice);
        let recommendations = advisory::recommendations(env, &input.practice, &input.crop);
        let risks = advisory::risk_factors(env);
        let harvest = harvest_date(input.planting_date, &input.crop, input.season)?;

        let unit = self.config.table.unit();
        let revenue = estimate_revenue(estimate.total, unit, &input.crop);

        debug!(
            crop = %input.crop,
            table = ?self.config.table,
            base_yield = base,
            environmental,
            practice,
            total = estimate.total,
            confidence,
            risks = risks.len(),
            "yield estimated"
        );

        Ok(PredictionResult::new(
            estimate,
            unit,
            confidence,
            recommendations,
            risks,
            harvest,
            revenue,
            Multipliers {
                environmental,
                practice,
            },
        ))
    }
}

/// Estimate with the default (standard table) engine.
pub fn estimate(input: &PredictionInput) -> DomainResult<PredictionResult> {
    YieldEngine::default().estimate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::{Locale, RiskKind};
    use crate::crop::{Crop, CropCategory, Season};
    use crate::environment::Environment;
    use crate::practice::{FertilizerType, IrrigationType, Practice, SeedQuality, SoilType};
    use crate::tables::YieldUnit;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use krishi_core::DomainError;
    use proptest::prelude::*;

    fn planted() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn safe_env() -> Environment {
        Environment {
            temperature_c: 25.0,
            rainfall_mm: 150.0,
            humidity_pct: 60.0,
            soil_ph: 6.8,
            nitrogen: 250.0,
            phosphorus: 40.0,
            potassium: 220.0,
        }
    }

    fn wheat_input() -> PredictionInput {
        PredictionInput {
            crop: Crop::Wheat,
            crop_category: CropCategory::Cereals,
            season: Season::Rabi,
            area: 2.0,
            planting_date: planted(),
            environment: safe_env(),
            practice: Practice {
                soil_type: SoilType::Loamy,
                irrigation_type: IrrigationType::Drip,
                fertilizer_type: Some(FertilizerType::Mixed),
                seed_quality: SeedQuality::High,
            },
        }
    }

    #[test]
    fn wheat_in_safe_conditions() {
        let result = estimate(&wheat_input()).unwrap();

        let practice = 1.10 * 1.15 * 1.10 * 1.10;
        assert_eq!(result.multipliers().environmental, 1.0);
        assert_relative_eq!(result.multipliers().practice, practice, max_relative = 1e-12);
        assert_relative_eq!(result.yield_per_unit_area(), 3.0 * practice, max_relative = 1e-12);
        assert_relative_eq!(result.predicted_production_total(), 6.0 * practice, max_relative = 1e-12);
        assert_relative_eq!(result.predicted_production_total(), 9.1839, epsilon = 1e-3);
        assert_eq!(result.confidence_pct(), 88);
        assert_eq!(result.unit(), YieldUnit::TonnesPerHectare);
        assert!(result.risk_factors().is_empty());
    }

    #[test]
    fn band_is_exactly_fifteen_percent() {
        let result = estimate(&wheat_input()).unwrap();
        let total = result.predicted_production_total();
        assert_eq!(result.predicted_yield_min(), total * 0.85);
        assert_eq!(result.predicted_yield_max(), total * 1.15);
    }

    #[test]
    fn rice_at_30mm_rainfall_is_penalized_for_yield_but_not_confidence() {
        let mut input = wheat_input();
        input.crop = Crop::Rice;
        input.season = Season::Kharif;
        input.practice.fertilizer_type = Some(FertilizerType::Organic);
        input.environment.rainfall_mm = 30.0;

        let result = estimate(&input).unwrap();
        assert_relative_eq!(result.multipliers().environmental, 0.85);
        assert_eq!(result.confidence_pct(), 85);
        assert_eq!(result.risk_factors()[0].factor, RiskKind::Drought);
    }

    #[test]
    fn rainfed_dry_field_takes_both_penalties() {
        let mut input = wheat_input();
        input.practice.irrigation_type = IrrigationType::Rainfed;
        input.practice.fertilizer_type = None;
        input.practice.seed_quality = SeedQuality::Medium;
        input.practice.soil_type = SoilType::Sandy;
        input.environment.rainfall_mm = 40.0;

        let result = estimate(&input).unwrap();
        assert_relative_eq!(result.multipliers().environmental, 0.85);
        assert_relative_eq!(result.multipliers().practice, 1.05 * 0.85, max_relative = 1e-12);
    }

    #[test]
    fn harvest_date_follows_crop_and_season() {
        let mut input = wheat_input();
        input.crop = Crop::Rice;
        input.season = Season::Kharif;
        let kharif = estimate(&input).unwrap();
        assert_eq!(kharif.expected_harvest_date(), NaiveDate::from_ymd_opt(2024, 9, 29).unwrap());

        input.season = Season::Rabi;
        let rabi = estimate(&input).unwrap();
        assert_eq!(rabi.expected_harvest_date(), NaiveDate::from_ymd_opt(2024, 10, 29).unwrap());
    }

    #[test]
    fn unknown_crop_falls_back_to_defaults() {
        let mut input = wheat_input();
        input.crop = Crop::parse("Quinoa");
        input.crop_category = CropCategory::Other;

        let result = estimate(&input).unwrap();
        // Loamy soil has no listed pairing for an unknown crop.
        let practice = 1.10 * 1.15 * 1.10;
        assert_relative_eq!(result.yield_per_unit_area(), 2.0 * practice, max_relative = 1e-12);
        assert_eq!(
            (result.expected_harvest_date() - input.planting_date).num_days(),
            120
        );
        assert_eq!(result.estimated_revenue().price_per_quintal, 2000.0);
    }

    #[test]
    fn legacy_table_reports_quintals_per_acre() {
        let engine = YieldEngine::with_table(YieldTable::Legacy);
        let result = engine.estimate(&wheat_input()).unwrap();

        let practice = 1.10 * 1.15 * 1.10 * 1.10;
        assert_eq!(result.unit(), YieldUnit::QuintalsPerAcre);
        assert_relative_eq!(result.yield_per_unit_area(), 20.0 * practice, max_relative = 1e-12);
        // Revenue is priced on quintals directly.
        let expected = (result.predicted_production_total() * 2000.0).round() as u64;
        assert_eq!(result.estimated_revenue().amount, expected);
    }

    #[test]
    fn standard_revenue_converts_tonnes() {
        let result = estimate(&wheat_input()).unwrap();
        let expected = (result.predicted_production_total() * 10.0 * 2000.0).round() as u64;
        assert_eq!(result.estimated_revenue().amount, expected);
    }

    #[test]
    fn invalid_input_is_rejected_before_scoring() {
        let mut input = wheat_input();
        input.area = 0.0;
        input.environment.rainfall_mm = -5.0;
        let err = estimate(&input).unwrap_err();
        match &err {
            DomainError::InvalidInput(_) => {}
            _ => panic!("Expected InvalidInput error"),
        }
        assert_eq!(err.invalid_fields(), vec!["area", "environment.rainfall_mm"]);
    }

    #[test]
    fn sub_zero_temperature_is_rejected() {
        let mut input = wheat_input();
        input.environment.temperature_c = -5.0;
        let err = estimate(&input).unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["environment.temperature_c"]);
    }

    #[test]
    fn blank_crop_is_not_defaulted() {
        let mut input = wheat_input();
        input.crop = Crop::parse("   ");
        let err = estimate(&input).unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["crop"]);
    }

    #[test]
    fn unrepresentable_production_is_rejected() {
        let mut input = wheat_input();
        input.area = 5e307;
        let err = estimate(&input).unwrap_err();
        match &err {
            DomainError::InvalidInput(_) => {}
            _ => panic!("Expected InvalidInput error"),
        }
        assert_eq!(err.invalid_fields(), vec!["area"]);
    }

    #[test]
    fn recommendations_filter_by_locale() {
        let mut input = wheat_input();
        input.environment.nitrogen = 120.0;
        let result = estimate(&input).unwrap();

        let english: Vec<&str> = result.recommendations_in(Locale::En).collect();
        assert_eq!(
            english,
            vec![
                "Nitrogen levels are low. Apply 100 kg Urea per acre",
                "Monitor crops regularly for pests and diseases",
            ]
        );
        assert_eq!(result.recommendations_in(Locale::Hi).count(), 2);
    }

    #[test]
    fn config_deserializes_with_default_table() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.table, YieldTable::Standard);
        let legacy: EngineConfig = serde_json::from_str(r#"{"table":"legacy"}"#).unwrap();
        assert_eq!(YieldEngine::new(legacy).config().table, YieldTable::Legacy);
    }

    fn arb_practice() -> impl Strategy<Value = Practice> {
        (
            prop_oneof![
                Just(SoilType::Clay),
                Just(SoilType::Loamy),
                Just(SoilType::Black),
                Just(SoilType::Alluvial),
                Just(SoilType::parse("PEATY")),
            ],
            prop_oneof![
                Just(IrrigationType::Drip),
                Just(IrrigationType::Sprinkler),
                Just(IrrigationType::Flood),
                Just(IrrigationType::Rainfed),
            ],
            prop_oneof![
                Just(None),
                Just(Some(FertilizerType::Organic)),
                Just(Some(FertilizerType::Chemical)),
                Just(Some(FertilizerType::Mixed)),
            ],
            prop_oneof![
                Just(SeedQuality::High),
                Just(SeedQuality::Medium),
                Just(SeedQuality::Low),
            ],
        )
            .prop_map(|(soil_type, irrigation_type, fertilizer_type, seed_quality)| Practice {
                soil_type,
                irrigation_type,
                fertilizer_type,
                seed_quality,
            })
    }

    fn arb_input() -> impl Strategy<Value = PredictionInput> {
        let crops = prop_oneof![
            Just(Crop::Rice),
            Just(Crop::Wheat),
            Just(Crop::Cotton),
            Just(Crop::Sugarcane),
            Just(Crop::Chickpea),
            Just(Crop::Banana),
            Just(Crop::parse("Quinoa")),
        ];
        let seasons = prop_oneof![
            Just(Season::Kharif),
            Just(Season::Rabi),
            Just(Season::Zaid),
            Just(Season::WholeYear),
        ];
        let env = (
            0.0f64..50.0,
            0.0f64..500.0,
            0.0f64..100.0,
            3.5f64..10.0,
            0.0f64..600.0,
            0.0f64..120.0,
            0.0f64..500.0,
        )
            .prop_map(|(t, r, h, ph, n, p, k)| Environment {
                temperature_c: t,
                rainfall_mm: r,
                humidity_pct: h,
                soil_ph: ph,
                nitrogen: n,
                phosphorus: p,
                potassium: k,
            });

        (crops, seasons, 0.01f64..500.0, 0u32..3650, env, arb_practice()).prop_map(
            |(crop, season, area, offset, environment, practice)| PredictionInput {
                crop_category: crop.category(),
                crop,
                season,
                area,
                planting_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                    + chrono::Days::new(u64::from(offset)),
                environment,
                practice,
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the band always brackets a non-negative total.
        #[test]
        fn band_brackets_non_negative_total(input in arb_input()) {
            let r = estimate(&input).unwrap();
            let total = r.predicted_production_total();
            prop_assert!(r.predicted_yield_min() >= 0.0);
            prop_assert!(r.predicted_yield_min() <= total);
            prop_assert!(total <= r.predicted_yield_max());
            prop_assert_eq!(r.predicted_yield_min(), total * 0.85);
            prop_assert_eq!(r.predicted_yield_max(), total * 1.15);
        }

        #[test]
        fn confidence_stays_in_range(input in arb_input()) {
            let r = estimate(&input).unwrap();
            prop_assert!((60..=95).contains(&r.confidence_pct()));
        }

        #[test]
        fn harvest_is_planting_plus_maturity(input in arb_input()) {
            let r = estimate(&input).unwrap();
            let days = tables::maturity_days(&input.crop, input.season);
            prop_assert!(r.expected_harvest_date() > input.planting_date);
            prop_assert_eq!(
                (r.expected_harvest_date() - input.planting_date).num_days(),
                i64::from(days)
            );
        }

        /// Property: identical input serializes to identical output.
        #[test]
        fn estimate_is_idempotent(input in arb_input()) {
            let a = serde_json::to_string(&estimate(&input).unwrap()).unwrap();
            let b = serde_json::to_string(&estimate(&input).unwrap()).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
