//! Malnutrition risk scoring.
//!
//! Additive, age-banded heuristic producing a 0–100 score. Edema is the
//! one absorbing case: its presence means severe acute malnutrition and
//! short-circuits every other factor.

use tracing::debug;

use nutriscreen_core::models::profile::NutritionalProfile;
use nutriscreen_core::models::risk::RiskScore;
use nutriscreen_core::models::screening::{FeedingBehavior, WeightLossBracket};

/// Points assumed when the age band's measurements are absent.
const MISSING_MEASUREMENT_POINTS: u32 = 20;

/// Older-adult cutoff for the functional-decline factor, in months.
const OLDER_ADULT_MONTHS: u32 = 720;

/// Compute the raw risk score for a profile. Total: every input shape
/// maps to some score.
pub fn score(profile: &NutritionalProfile) -> u8 {
    if profile.has_edema {
        debug!("edema present, returning maximum risk");
        return 100;
    }

    let mut points = anthropometric_component(profile);

    points += match profile.weight_loss {
        WeightLossBracket::OverTenPercent => 20,
        WeightLossBracket::FiveToTenPercent => 10,
        _ => 0,
    };

    points += match profile.feeding {
        FeedingBehavior::PoorAppetite | FeedingBehavior::ModerateAppetite => 8,
        _ => 0,
    };

    let signs = &profile.physical_signs;
    points += [signs.thin, signs.shorter, signs.weak]
        .iter()
        .filter(|flag| **flag)
        .count() as u32
        * 8;

    points += match profile.dietary_diversity {
        Some(groups) if groups < 4 => 10,
        Some(groups) if groups < 6 => 5,
        Some(_) => 0,
        None => 5,
    };

    let clinical = &profile.clinical;
    if clinical.recent_illness {
        points += 8;
    }
    if clinical.eating_difficulty {
        points += 8;
    }
    if clinical.food_insecurity {
        points += 10;
    }
    if clinical.micronutrient_signs {
        points += 6;
    }
    if clinical.functional_decline && profile.age_months >= OLDER_ADULT_MONTHS {
        points += 8;
    }

    points.min(100) as u8
}

/// Score plus qualitative category and label.
pub fn assess(profile: &NutritionalProfile) -> RiskScore {
    RiskScore::from_score(score(profile))
}

/// Age-banded anthropometry: MUAC for 6–59 months (weight-for-height as
/// the fallback proxy), BMI-for-age for 5–19 years, adult BMI cutoffs
/// from 20 years up. Under 6 months no band applies.
fn anthropometric_component(profile: &NutritionalProfile) -> u32 {
    match profile.age_months {
        0..=5 => 0,
        6..=59 => {
            if let Some(muac) = profile.muac_cm {
                if muac < 11.5 {
                    40
                } else if muac < 12.5 {
                    25
                } else {
                    0
                }
            } else if let (Some(weight), Some(height)) = (profile.weight_kg, profile.height_cm) {
                // Weight-for-height proxy: weight over height squared, with
                // wasting cutoffs (severe below 13, moderate below 14).
                let metres = height / 100.0;
                let ratio = weight / (metres * metres);
                if ratio < 13.0 {
                    40
                } else if ratio < 14.0 {
                    25
                } else {
                    0
                }
            } else {
                MISSING_MEASUREMENT_POINTS
            }
        }
        60..=239 => match profile.bmi {
            Some(bmi) if bmi < 15.0 => 40,
            Some(bmi) if bmi < 17.0 => 30,
            Some(bmi) if bmi < 18.5 => 20,
            Some(_) => 0,
            None => MISSING_MEASUREMENT_POINTS,
        },
        _ => match profile.bmi {
            Some(bmi) if bmi < 16.5 => 40,
            Some(bmi) if bmi < 18.5 => 25,
            Some(_) => 0,
            None => MISSING_MEASUREMENT_POINTS,
        },
    }
}
