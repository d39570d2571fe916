use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::preferences::DietaryPreference;
use crate::models::screening::{
    ClinicalFlags, FeedingBehavior, Gender, IncomeBracket, PhysicalSigns, WeightLossBracket,
};

/// Normalized, fully typed view of a screening record, plus the computed
/// fields every downstream stage needs. Rebuilt fresh on each
/// recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutritionalProfile {
    pub age_months: u32,
    pub age_bracket: AgeBracket,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub muac_cm: Option<f64>,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub gender: Gender,
    pub income: IncomeBracket,
    pub has_edema: bool,
    pub weight_loss: WeightLossBracket,
    pub feeding: FeedingBehavior,
    pub physical_signs: PhysicalSigns,
    pub dietary_diversity: Option<u8>,
    pub clinical: ClinicalFlags,
    /// Lowercased allergy entries.
    pub allergies: Vec<String>,
    pub preferences: Vec<DietaryPreference>,
    /// Lowercased avoid-list entries, split on commas.
    pub avoid_foods: Vec<String>,
}

/// Feeding-stage age bands. Everything above 144 months gets adult
/// treatment: no hard age filtering, adult portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBracket {
    /// 0–6 months: breastmilk or formula only.
    EarlyInfant,
    /// 6–12 months: soft purees.
    Infant,
    /// 12–24 months: soft foods, some texture.
    EarlyToddler,
    /// 24–36 months: bite-sized foods.
    Toddler,
    /// 3–5 years: kid-friendly foods.
    Preschool,
    /// 5–12 years: complex, energy-dense foods.
    SchoolAge,
    /// 12+ years: adult portions.
    Adult,
}

impl AgeBracket {
    pub fn from_months(age_months: u32) -> Self {
        match age_months {
            0..=6 => Self::EarlyInfant,
            7..=12 => Self::Infant,
            13..=24 => Self::EarlyToddler,
            25..=36 => Self::Toddler,
            37..=60 => Self::Preschool,
            61..=144 => Self::SchoolAge,
            _ => Self::Adult,
        }
    }

    /// The literal catalog tag a dish must carry to be age-appropriate
    /// for this bracket.
    pub fn dish_tag(&self) -> &'static str {
        match self {
            Self::EarlyInfant => "infant-early",
            Self::Infant => "infant",
            Self::EarlyToddler => "toddler-early",
            Self::Toddler => "toddler",
            Self::Preschool => "preschool",
            Self::SchoolAge => "school-age",
            Self::Adult => "adolescent",
        }
    }

    pub fn is_adult(&self) -> bool {
        matches!(self, Self::Adult)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}
