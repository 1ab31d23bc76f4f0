use krishi_yield::{PredictionInput, PredictionResult, YieldEngine};

use crate::error::PredictorError;

/// Anything that can turn a `PredictionInput` into a `PredictionResult`.
///
/// A trained-model client implements this alongside the heuristic engine so
/// callers are unaffected by which one serves a request.
pub trait YieldPredictor: Send + Sync + 'static {
    /// Short stable name for logs.
    fn name(&self) -> &'static str;

    /// Produce a prediction. Must not mutate shared state.
    fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictorError>;
}

impl YieldPredictor for YieldEngine {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictorError> {
        Ok(self.estimate(input)?)
    }
}
