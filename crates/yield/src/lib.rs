//! `krishi-yield` — crop yield estimation engine.
//!
//! A deterministic, explainable heuristic scorer: given crop, environmental and
//! farming-practice inputs it produces a yield estimate with a fixed-width band,
//! a confidence score, an expected harvest date, an indicative revenue figure,
//! and locale-tagged recommendations plus risk factors.
//!
//! Everything here is pure domain logic (no IO, no HTTP, no storage). The engine
//! is safe to call concurrently; lookup tables are compile-time constants.

mod keyed;

pub mod advisory;
pub mod confidence;
pub mod crop;
pub mod engine;
pub mod environment;
pub mod harvest;
pub mod input;
pub mod practice;
pub mod result;
pub mod revenue;
pub mod synthesis;
pub mod tables;

pub use advisory::{Locale, Priority, Recommendation, RiskFactor, RiskKind, RiskSeverity, Topic};
pub use crop::{Crop, CropCategory, Season};
pub use engine::{estimate, EngineConfig, YieldEngine};
pub use environment::Environment;
pub use input::PredictionInput;
pub use practice::{FertilizerType, IrrigationType, Practice, SeedQuality, SoilType};
pub use result::{Multipliers, PredictionResult};
pub use revenue::Revenue;
pub use synthesis::{YieldBand, YieldEstimate};
pub use tables::{YieldTable, YieldUnit};
