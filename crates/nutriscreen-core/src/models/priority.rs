use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Closed vocabulary of nutritional intervention categories. Deriving these
/// as an enum (instead of raw strings) keeps rule tables typo-proof; the
/// bridge to literal catalog tags is the reviewed `dish_tag` table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PriorityTag {
    GrowthSupport,
    WeightGain,
    ProteinEnergyDeficiency,
    MalnutritionRecovery,
    HighProtein,
    HighEnergy,
    EnergyDense,
    IronRich,
    VitaminA,
    VitaminC,
    CalciumRich,
    FiberRich,
    ImmuneSupport,
    EasyDigest,
    SoftTexture,
    Pureed,
    BiteSized,
    KidFriendly,
    Balanced,
    LowCarb,
    LowSodium,
    BudgetFriendly,
    Maintenance,
}

impl PriorityTag {
    /// The literal catalog tag this priority matches against. Several
    /// clinical categories intentionally share a dish tag (a dish is
    /// "high-protein"; it is never "protein-energy-deficiency").
    pub fn dish_tag(&self) -> &'static str {
        match self {
            Self::GrowthSupport => "growth-support",
            Self::WeightGain => "high-energy",
            Self::ProteinEnergyDeficiency => "high-protein",
            Self::MalnutritionRecovery => "malnutrition",
            Self::HighProtein => "high-protein",
            Self::HighEnergy => "high-energy",
            Self::EnergyDense => "energy-dense",
            Self::IronRich => "iron-rich",
            Self::VitaminA => "vitamin-a",
            Self::VitaminC => "vitamin-c",
            Self::CalciumRich => "calcium-rich",
            Self::FiberRich => "fiber-rich",
            Self::ImmuneSupport => "vitamin-c",
            Self::EasyDigest => "easy-digest",
            Self::SoftTexture => "soft",
            Self::Pureed => "pureed",
            Self::BiteSized => "bite-sized",
            Self::KidFriendly => "kid-friendly",
            Self::Balanced => "balanced",
            Self::LowCarb => "low-carb",
            Self::LowSodium => "low-sodium",
            Self::BudgetFriendly => "low-cost",
            Self::Maintenance => "balanced",
        }
    }
}
