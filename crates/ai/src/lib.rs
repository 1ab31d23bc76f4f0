//! `krishi-ai`
//!
//! **Responsibility:** prediction-service boundary around the yield engine.
//!
//! - `YieldPredictor` is the contract any estimator honours, trained model or
//!   heuristic; callers depend on it instead of a concrete backend.
//! - `FallbackPredictor` serves from a model when one is configured and falls
//!   back to the deterministic engine when it is absent or failing.
//! - `InputAssembler` turns a farm-side `PredictionRequest` plus optional
//!   weather/soil providers into a normalized `PredictionInput`.
//!
//! Provider and model transports live outside this crate; only their traits
//! are defined here.

pub mod error;
pub mod fallback;
pub mod predictor;
pub mod readings;
pub mod request;

pub use error::{PredictorError, ProviderError};
pub use fallback::{FallbackPredictor, Prediction, PredictionSource};
pub use predictor::YieldPredictor;
pub use readings::{
    Location, ReadingDefaults, SoilProvider, SoilReading, WeatherProvider, WeatherReading,
};
pub use request::{InputAssembler, PredictionRequest};
