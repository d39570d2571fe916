//! Nutritional priority derivation.
//!
//! Each rule below is independent and only ever appends: no rule suppresses
//! another, so adding a risk factor can never remove a priority. Duplicates
//! are kept on purpose — the ranker scores each occurrence, which weights
//! repeatedly-indicated priorities higher.

use nutriscreen_core::models::priority::PriorityTag;
use nutriscreen_core::models::profile::{AgeBracket, NutritionalProfile};
use nutriscreen_core::models::risk::RiskScore;
use nutriscreen_core::models::screening::{FeedingBehavior, Gender, WeightLossBracket};

use PriorityTag::*;

/// Derive the ordered priority list for a profile. Never empty: a profile
/// with nothing to flag gets the maintenance default.
pub fn derive(profile: &NutritionalProfile, risk: &RiskScore) -> Vec<PriorityTag> {
    let mut tags: Vec<PriorityTag> = Vec::new();

    // Baseline severity from the overall score.
    if risk.score >= 80 {
        tags.extend([MalnutritionRecovery, HighProtein, HighEnergy]);
    }
    if risk.score >= 50 {
        tags.extend([HighProtein, IronRich]);
    }
    if risk.score >= 20 {
        tags.push(Balanced);
    }

    tags.extend(bracket_tags(profile.age_bracket));

    // Adult BMI heuristics are unreliable below 12 years.
    if profile.age_months >= 144 {
        if let Some(bmi) = profile.bmi {
            if bmi < 18.5 {
                tags.extend([HighProtein, HighEnergy]);
            } else if bmi > 25.0 {
                tags.extend([LowCarb, FiberRich]);
                if bmi > 30.0 {
                    tags.push(LowSodium);
                }
            }
        }
    }

    if profile.physical_signs.thin {
        tags.extend([WeightGain, ProteinEnergyDeficiency, HighEnergy]);
    }
    if profile.physical_signs.shorter {
        tags.extend([GrowthSupport, CalciumRich]);
    }
    if profile.physical_signs.weak {
        tags.extend([HighEnergy, IronRich]);
    }

    match profile.weight_loss {
        WeightLossBracket::OverTenPercent => tags.extend([WeightGain, HighEnergy]),
        WeightLossBracket::FiveToTenPercent => tags.push(HighEnergy),
        _ => {}
    }

    if matches!(
        profile.feeding,
        FeedingBehavior::PoorAppetite | FeedingBehavior::ModerateAppetite
    ) {
        tags.extend([EasyDigest, SoftTexture]);
    }

    let clinical = &profile.clinical;
    if clinical.recent_illness {
        tags.extend([ImmuneSupport, VitaminC]);
    }
    if clinical.eating_difficulty {
        tags.extend([SoftTexture, EasyDigest]);
    }
    if clinical.food_insecurity {
        tags.extend([EnergyDense, BudgetFriendly]);
    }
    if clinical.micronutrient_signs {
        tags.extend([IronRich, VitaminA, VitaminC]);
    }
    if clinical.functional_decline {
        tags.extend([HighProtein, EasyDigest]);
    }

    if profile.dietary_diversity.is_some_and(|groups| groups < 4) {
        tags.extend([VitaminA, VitaminC]);
    }

    // Targeted additions: adolescent and adult women need more iron;
    // low-income households need affordable picks surfaced.
    if profile.gender == Gender::Female && profile.age_months >= 144 {
        tags.push(IronRich);
    }
    if profile.income.includes_untagged_dishes() {
        tags.push(BudgetFriendly);
    }

    if tags.is_empty() {
        tags.push(Maintenance);
    }
    tags
}

/// Feeding-stage priorities per age band.
fn bracket_tags(bracket: AgeBracket) -> &'static [PriorityTag] {
    match bracket {
        AgeBracket::EarlyInfant => &[GrowthSupport],
        AgeBracket::Infant => &[GrowthSupport, SoftTexture, EasyDigest, Pureed],
        AgeBracket::EarlyToddler => &[GrowthSupport, SoftTexture, HighProtein, EasyDigest],
        AgeBracket::Toddler => &[GrowthSupport, SoftTexture, HighProtein, BiteSized],
        AgeBracket::Preschool => &[HighProtein, FiberRich, KidFriendly],
        AgeBracket::SchoolAge => &[HighProtein, FiberRich, EnergyDense],
        AgeBracket::Adult => &[HighProtein, FiberRich, Balanced],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscreen_core::models::risk::RiskScore;
    use nutriscreen_core::models::screening::{ClinicalFlags, IncomeBracket, PhysicalSigns};

    fn profile(age_months: u32) -> NutritionalProfile {
        NutritionalProfile {
            age_months,
            age_bracket: AgeBracket::from_months(age_months),
            weight_kg: None,
            height_cm: None,
            muac_cm: None,
            bmi: None,
            bmi_category: None,
            gender: Gender::Unspecified,
            income: IncomeBracket::Unspecified,
            has_edema: false,
            weight_loss: WeightLossBracket::UnderFivePercent,
            feeding: FeedingBehavior::GoodAppetite,
            physical_signs: PhysicalSigns::default(),
            dietary_diversity: Some(6),
            clinical: ClinicalFlags::default(),
            allergies: Vec::new(),
            preferences: Vec::new(),
            avoid_foods: Vec::new(),
        }
    }

    #[test]
    fn priorities_are_never_empty() {
        let tags = derive(&profile(360), &RiskScore::from_score(0));
        assert!(!tags.is_empty());
    }

    #[test]
    fn severe_risk_layers_all_threshold_tags() {
        let tags = derive(&profile(360), &RiskScore::from_score(86));
        assert!(tags.contains(&MalnutritionRecovery));
        assert!(tags.contains(&IronRich));
        assert!(tags.contains(&Balanced));
    }

    #[test]
    fn young_child_brackets_add_growth_support() {
        let tags = derive(&profile(30), &RiskScore::from_score(0));
        assert!(tags.contains(&GrowthSupport));
        assert!(tags.contains(&BiteSized));
    }

    #[test]
    fn bmi_extremes_add_deficiency_and_prevention_tags() {
        let mut p = profile(360);
        p.bmi = Some(17.0);
        let tags = derive(&p, &RiskScore::from_score(0));
        assert!(tags.contains(&HighEnergy));

        p.bmi = Some(27.0);
        let tags = derive(&p, &RiskScore::from_score(0));
        assert!(tags.contains(&LowCarb));
        assert!(!tags.contains(&LowSodium));

        p.bmi = Some(32.0);
        let tags = derive(&p, &RiskScore::from_score(0));
        assert!(tags.contains(&LowSodium));
    }

    #[test]
    fn thin_sign_adds_weight_gain_and_deficiency_tags() {
        let mut p = profile(360);
        p.physical_signs.thin = true;
        let tags = derive(&p, &RiskScore::from_score(0));
        assert!(tags.contains(&WeightGain));
        assert!(tags.contains(&ProteinEnergyDeficiency));
    }

    #[test]
    fn rules_accumulate_instead_of_suppressing() {
        let mut p = profile(360);
        p.physical_signs.thin = true;
        let baseline = derive(&p, &RiskScore::from_score(0)).len();

        p.clinical.food_insecurity = true;
        let with_more = derive(&p, &RiskScore::from_score(0)).len();
        assert!(with_more > baseline);
    }

    #[test]
    fn low_diversity_adds_micronutrient_tags() {
        let mut p = profile(360);
        p.dietary_diversity = Some(2);
        let tags = derive(&p, &RiskScore::from_score(0));
        assert!(tags.contains(&VitaminA));
        assert!(tags.contains(&VitaminC));
    }

    #[test]
    fn adult_female_and_low_income_get_targeted_tags() {
        let mut p = profile(360);
        p.gender = Gender::Female;
        p.income = IncomeBracket::Low;
        let tags = derive(&p, &RiskScore::from_score(0));
        assert!(tags.contains(&IronRich));
        assert!(tags.contains(&BudgetFriendly));
    }

    #[test]
    fn duplicate_tags_are_preserved_for_weighting() {
        let mut p = profile(360);
        p.physical_signs.thin = true;
        p.physical_signs.weak = true;
        let tags = derive(&p, &RiskScore::from_score(0));
        let high_energy = tags.iter().filter(|t| **t == HighEnergy).count();
        assert!(high_energy >= 2);
    }
}
