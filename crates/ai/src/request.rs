//! Caller-side assembly of a `PredictionInput`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use krishi_yield::{Crop, CropCategory, PredictionInput, Practice, Season};

use crate::readings::{
    Location, ReadingDefaults, SoilProvider, SoilReading, WeatherProvider, WeatherReading,
};

/// What the farmer (or farm record) supplies for a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub crop: Crop,
    /// Defaults to the crop's conventional category.
    #[serde(default)]
    pub crop_category: Option<CropCategory>,
    /// Inferred from the planting month when absent.
    #[serde(default)]
    pub season: Option<Season>,
    pub area: f64,
    pub planting_date: NaiveDate,
    /// Without a location no provider is consulted.
    #[serde(default)]
    pub location: Option<Location>,
    pub practice: Practice,
}

/// Fetches readings for a request and fills gaps with defaults.
///
/// Provider failures never abort assembly: they are logged and the
/// documented defaults take their place.
pub struct InputAssembler {
    weather: Option<Box<dyn WeatherProvider>>,
    soil: Option<Box<dyn SoilProvider>>,
    defaults: ReadingDefaults,
}

impl Default for InputAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputAssembler {
    pub fn new() -> Self {
        Self {
            weather: None,
            soil: None,
            defaults: ReadingDefaults::default(),
        }
    }

    pub fn with_weather(mut self, provider: impl WeatherProvider + 'static) -> Self {
        self.weather = Some(Box::new(provider));
        self
    }

    pub fn with_soil(mut self, provider: impl SoilProvider + 'static) -> Self {
        self.soil = Some(Box::new(provider));
        self
    }

    pub fn with_defaults(mut self, defaults: ReadingDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn assemble(&self, request: PredictionRequest) -> PredictionInput {
        let (weather, soil) = match &request.location {
            Some(location) => (self.fetch_weather(location), self.fetch_soil(location)),
            None => (WeatherReading::default(), SoilReading::default()),
        };

        let season = request
            .season
            .unwrap_or_else(|| Season::from_planting_date(request.planting_date));
        let crop_category = request.crop_category.unwrap_or_else(|| request.crop.category());

        PredictionInput {
            crop: request.crop,
            crop_category,
            season,
            area: request.area,
            planting_date: request.planting_date,
            environment: self.defaults.environment(&weather, &soil),
            practice: request.practice,
        }
    }

    fn fetch_weather(&self, location: &Location) -> WeatherReading {
        let Some(provider) = &self.weather else {
            return WeatherReading::default();
        };
        provider.weather(location).unwrap_or_else(|err| {
            warn!(error = %err, "weather provider failed; using default readings");
            WeatherReading::default()
        })
    }

    fn fetch_soil(&self, location: &Location) -> SoilReading {
        let Some(provider) = &self.soil else {
            return SoilReading::default();
        };
        provider.soil(location).unwrap_or_else(|err| {
            warn!(error = %err, "soil provider failed; using default readings");
            SoilReading::default()
        })
    }
}
