use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Dietary preferences the filter understands. Unknown free-text entries
/// are ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    Pescatarian,
    GlutenFree,
    DairyFree,
    NutFree,
}

impl DietaryPreference {
    /// Parse a free-text screening answer, case-insensitively.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "pescatarian" => Some(Self::Pescatarian),
            "gluten-free" | "gluten free" => Some(Self::GlutenFree),
            "dairy-free" | "dairy free" => Some(Self::DairyFree),
            "nut-free" | "nut free" => Some(Self::NutFree),
            _ => None,
        }
    }

    /// The explicit catalog tag for this preference. A dish tagged
    /// `non-<tag>` is vetoed outright.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::GlutenFree => "gluten-free",
            Self::DairyFree => "dairy-free",
            Self::NutFree => "nut-free",
        }
    }
}
