//! Recommendation and risk-factor rules.
//!
//! Rules are evaluated unconditionally and in a fixed order; each may append
//! entries. Risk thresholds intentionally differ from the yield adjustors and
//! the confidence scorer.

use serde::{Deserialize, Serialize};

use crate::crop::Crop;
use crate::environment::Environment;
use crate::practice::{FertilizerType, Practice, SeedQuality};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Hindi.
    Hi,
    /// English.
    En,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topic {
    Soil,
    Fertilizer,
    Seed,
    PestMonitoring,
}

/// Ordered most urgent first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One advisory line in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: Topic,
    pub priority: Priority,
    pub locale: Locale,
    pub text: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskKind {
    #[serde(rename = "Heat Stress")]
    HeatStress,
    #[serde(rename = "Drought")]
    Drought,
    #[serde(rename = "High Humidity")]
    HighHumidity,
    #[serde(rename = "Soil pH")]
    SoilPh,
}

impl RiskKind {
    pub fn label(self) -> &'static str {
        match self {
            RiskKind::HeatStress => "Heat Stress",
            RiskKind::Drought => "Drought",
            RiskKind::HighHumidity => "High Humidity",
            RiskKind::SoilPh => "Soil pH",
        }
    }
}

impl core::fmt::Display for RiskKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: RiskKind,
    pub severity: RiskSeverity,
    pub impact: String,
}

impl RiskFactor {
    fn new(factor: RiskKind, severity: RiskSeverity, impact: &str) -> Self {
        Self {
            factor,
            severity,
            impact: impact.to_string(),
        }
    }
}

/// Urea dose in kg/acre for the low-nitrogen advisory.
fn urea_dose_kg_per_acre(crop: &Crop) -> u32 {
    if *crop == Crop::Rice { 120 } else { 100 }
}

fn push_bilingual(
    out: &mut Vec<Recommendation>,
    topic: Topic,
    priority: Priority,
    hindi: String,
    english: String,
) {
    out.push(Recommendation {
        topic,
        priority,
        locale: Locale::Hi,
        text: hindi,
    });
    out.push(Recommendation {
        topic,
        priority,
        locale: Locale::En,
        text: english,
    });
}

/// Advisory lines for the field, Hindi then English for each rule.
pub fn recommendations(env: &Environment, practice: &Practice, crop: &Crop) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if env.soil_ph < 6.0 {
        push_bilingual(
            &mut out,
            Topic::Soil,
            Priority::High,
            "मिट्टी अम्लीय है। पीएच बढ़ाने के लिए 2-3 क्विंटल चूना प्रति एकड़ डालें।".to_string(),
            "Soil is acidic. Apply 2-3 quintals of lime per acre to increase pH to 6.5-7.0"
                .to_string(),
        );
    }

    if env.soil_ph > 7.5 {
        push_bilingual(
            &mut out,
            Topic::Soil,
            Priority::Medium,
            "मिट्टी क्षारीय है। 5-10 टन कम्पोस्ट प्रति एकड़ डालें।".to_string(),
            "Soil is alkaline. Add 5-10 tons of compost per acre".to_string(),
        );
    }

    if env.nitrogen < 200.0 {
        let dose = urea_dose_kg_per_acre(crop);
        push_bilingual(
            &mut out,
            Topic::Fertilizer,
            Priority::High,
            format!("नाइट्रोजन का स्तर कम है। {dose} किलो यूरिया प्रति एकड़ डालें।"),
            format!("Nitrogen levels are low. Apply {dose} kg Urea per acre"),
        );
    }

    if practice.seed_quality == SeedQuality::Low {
        push_bilingual(
            &mut out,
            Topic::Seed,
            Priority::Medium,
            "बीज की गुणवत्ता कम है। उच्च गुणवत्ता वाले प्रमाणित बीज का उपयोग करें।".to_string(),
            "Seed quality is low. Use high-quality certified seeds for better yield".to_string(),
        );
    }

    if practice.fertilizer_type == Some(FertilizerType::Chemical) {
        push_bilingual(
            &mut out,
            Topic::Fertilizer,
            Priority::Low,
            "केवल रासायनिक उर्वरक का उपयोग करने से मिट्टी की सेहत पर असर पड़ सकता है।".to_string(),
            "Consider adding organic matter to maintain soil health alongside chemical fertilizers"
                .to_string(),
        );
    }

    push_bilingual(
        &mut out,
        Topic::PestMonitoring,
        Priority::Low,
        "नियमित रूप से कीट और रोग निगरानी करें।".to_string(),
        "Monitor crops regularly for pests and diseases".to_string(),
    );

    out
}

/// Structured risks derived from the environmental readings.
pub fn risk_factors(env: &Environment) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    if env.temperature_c > 38.0 {
        risks.push(RiskFactor::new(
            RiskKind::HeatStress,
            RiskSeverity::High,
            "15-20% yield reduction",
        ));
    }
    if env.rainfall_mm < 50.0 {
        risks.push(RiskFactor::new(
            RiskKind::Drought,
            RiskSeverity::High,
            "critical water shortage",
        ));
    }
    if env.humidity_pct > 85.0 {
        risks.push(RiskFactor::new(
            RiskKind::HighHumidity,
            RiskSeverity::Medium,
            "increased disease risk",
        ));
    }
    if env.soil_ph < 5.5 || env.soil_ph > 8.0 {
        risks.push(RiskFactor::new(
            RiskKind::SoilPh,
            RiskSeverity::Medium,
            "nutrient availability affected",
        ));
    }

    risks
}
