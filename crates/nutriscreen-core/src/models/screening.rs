use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// One screening submission. Created whole on submit/edit and treated as
/// immutable afterwards; downstream stages work on the derived
/// `NutritionalProfile`, never on this record directly.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    /// Body weight in kilograms. `None` when the answer was blank or unparseable.
    pub weight_kg: Option<f64>,
    /// Standing height in centimetres.
    pub height_cm: Option<f64>,
    /// Mid-upper arm circumference in centimetres, measured for ages 6–59 months.
    pub muac_cm: Option<f64>,
    pub birth_date: Option<jiff::civil::Date>,
    pub gender: Gender,
    pub income: IncomeBracket,
    pub barangay: Option<String>,
    /// Bilateral pitting edema observed.
    pub has_edema: bool,
    pub weight_loss: WeightLossBracket,
    pub feeding: FeedingBehavior,
    pub physical_signs: PhysicalSigns,
    /// Distinct food groups consumed in the recall period.
    pub dietary_diversity: Option<u8>,
    pub clinical: ClinicalFlags,
    /// Free-text allergy entries, e.g. "peanuts".
    pub allergies: Vec<String>,
    /// Free-text dietary preference entries, e.g. "vegetarian".
    pub diet_preferences: Vec<String>,
    /// Comma-separated foods the respondent wants excluded.
    pub avoid_foods: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ScreeningRecord {
    /// Deserialize a record previously stored as JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for storage.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

/// Household income bracket from the screening form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IncomeBracket {
    /// Below the regional food threshold.
    Low,
    LowerMiddle,
    Middle,
    High,
    #[default]
    Unspecified,
}

impl IncomeBracket {
    /// Whether this bracket gets the inclusive treatment for dishes that
    /// carry no cost tag at all. Only the lowest bracket: untagged dishes
    /// are treated as implicitly affordable there and nowhere else.
    pub fn includes_untagged_dishes(&self) -> bool {
        matches!(self, Self::Low)
    }
}

/// Self-reported unintentional weight loss over the past 3 months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightLossBracket {
    OverTenPercent,
    FiveToTenPercent,
    UnderFivePercent,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FeedingBehavior {
    GoodAppetite,
    ModerateAppetite,
    PoorAppetite,
    #[default]
    Unspecified,
}

/// Caregiver-observed physical signs. Each flag contributes independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhysicalSigns {
    pub thin: bool,
    pub shorter: bool,
    pub weak: bool,
}

/// Clinical and social risk factors from the screening questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalFlags {
    pub recent_illness: bool,
    pub eating_difficulty: bool,
    pub food_insecurity: bool,
    pub micronutrient_signs: bool,
    /// Only scored for older adults.
    pub functional_decline: bool,
}
