use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Malnutrition risk assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskScore {
    /// Always in 0..=100.
    pub score: u8,
    pub category: RiskCategory,
    /// Human-readable label, e.g. "Severe Risk".
    pub label: String,
}

impl RiskScore {
    pub fn from_score(score: u8) -> Self {
        let category = RiskCategory::from_score(score);
        Self {
            score,
            category,
            label: category.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskCategory {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Self::Low,
            20..=49 => Self::Moderate,
            50..=79 => Self::High,
            _ => Self::Severe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::Severe => "Severe Risk",
        }
    }

    /// Guidance string shown alongside the score on the result screen.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Low => "Nutritional status looks stable. Keep up a varied diet.",
            Self::Moderate => "Some risk factors present. Follow the recommended foods closely.",
            Self::High => "Significant risk factors found. A follow-up visit is advised.",
            Self::Severe => "Severe risk. Urgent referral to a health worker is advised.",
        }
    }
}
