use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use krishi_yield::{PredictionInput, PredictionResult, YieldEngine};

use crate::error::PredictorError;
use crate::predictor::YieldPredictor;

/// Which backend produced a prediction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionSource {
    Model,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub source: PredictionSource,
    pub result: PredictionResult,
}

/// Model-first predictor with the heuristic engine as a safety net.
///
/// - No model configured: every request is served by the engine.
/// - Model fails with a recoverable error: logged, then served by the engine.
/// - Input rejected: the error is returned as is (the engine would reject it too).
pub struct FallbackPredictor {
    primary: Option<Box<dyn YieldPredictor>>,
    fallback: YieldEngine,
}

impl FallbackPredictor {
    pub fn new(fallback: YieldEngine) -> Self {
        Self {
            primary: None,
            fallback,
        }
    }

    pub fn with_primary(mut self, primary: impl YieldPredictor) -> Self {
        self.primary = Some(Box::new(primary));
        self
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub fn run(&self, input: &PredictionInput) -> Result<Prediction, PredictorError> {
        if let Some(primary) = &self.primary {
            match primary.predict(input) {
                Ok(result) => {
                    info!(predictor = primary.name(), "prediction served by model");
                    return Ok(Prediction {
                        source: PredictionSource::Model,
                        result,
                    });
                }
                Err(err) if !err.is_recoverable() => return Err(err),
                Err(err) => {
                    warn!(
                        predictor = primary.name(),
                        error = %err,
                        "model prediction failed; using heuristic fallback"
                    );
                }
            }
        }

        let result = self.fallback.estimate(input)?;
        info!(crop = %input.crop, "prediction served by heuristic engine");
        Ok(Prediction {
            source: PredictionSource::Heuristic,
            result,
        })
    }
}

impl core::fmt::Debug for FallbackPredictor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FallbackPredictor")
            .field("primary", &self.primary.as_ref().map(|p| p.name()))
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl YieldPredictor for FallbackPredictor {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictorError> {
        self.run(input).map(|p| p.result)
    }
}
