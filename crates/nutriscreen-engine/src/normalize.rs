//! Screening answers → typed record → `NutritionalProfile`.
//!
//! Screening answers arrive as a flat key→value map whose values are
//! whatever the form layer produced: numbers, numeric strings, yes/no
//! strings, arrays, comma-separated lists. Every reader here is lenient —
//! a malformed value becomes the documented default, never an error.

use jiff::civil::Date;
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use nutriscreen_core::models::preferences::DietaryPreference;
use nutriscreen_core::models::profile::{AgeBracket, BmiCategory, NutritionalProfile};
use nutriscreen_core::models::screening::{
    ClinicalFlags, FeedingBehavior, Gender, IncomeBracket, PhysicalSigns, ScreeningRecord,
    WeightLossBracket,
};

/// Assumed age when the birth date is missing or unparseable.
pub const DEFAULT_AGE_MONTHS: u32 = 24;

/// Build a typed record from raw screening answers.
pub fn record_from_answers(answers: &Map<String, Value>, now: jiff::Timestamp) -> ScreeningRecord {
    ScreeningRecord {
        id: Uuid::new_v4(),
        weight_kg: opt_f64(answers, "weight"),
        height_cm: opt_f64(answers, "height"),
        muac_cm: opt_f64(answers, "muac"),
        birth_date: opt_date(answers, "birthday"),
        gender: parse_gender(opt_str(answers, "gender").as_deref()),
        income: parse_income(opt_str(answers, "income").as_deref()),
        barangay: opt_str(answers, "barangay"),
        has_edema: opt_yes(answers, "swelling"),
        weight_loss: parse_weight_loss(opt_str(answers, "weight_loss").as_deref()),
        feeding: parse_feeding(opt_str(answers, "feeding_behavior").as_deref()),
        physical_signs: parse_physical_signs(answers.get("physical_signs")),
        dietary_diversity: opt_u8(answers, "dietary_diversity"),
        clinical: ClinicalFlags {
            recent_illness: opt_bool(answers, "has_recent_illness"),
            eating_difficulty: opt_bool(answers, "has_eating_difficulty"),
            food_insecurity: opt_bool(answers, "has_food_insecurity"),
            micronutrient_signs: opt_bool(answers, "has_micronutrient_deficiency"),
            functional_decline: opt_bool(answers, "has_functional_decline"),
        },
        allergies: string_list(answers.get("allergies")),
        diet_preferences: string_list(answers.get("diet_prefs")),
        avoid_foods: opt_str(answers, "avoid_foods").unwrap_or_default(),
        created_at: now,
        updated_at: now,
    }
}

/// Derive the normalized profile. The reference date replaces any
/// wall-clock read so the result is reproducible.
pub fn normalize(record: &ScreeningRecord, reference: Date) -> NutritionalProfile {
    let age_months = match record.birth_date {
        Some(birth) => age_in_months(birth, reference),
        None => {
            debug!("birth date missing, assuming {DEFAULT_AGE_MONTHS} months");
            DEFAULT_AGE_MONTHS
        }
    };

    let bmi = match (record.weight_kg, record.height_cm) {
        (Some(weight), Some(height)) if weight > 0.0 && height > 0.0 => {
            let metres = height / 100.0;
            Some(weight / (metres * metres))
        }
        _ => None,
    };

    NutritionalProfile {
        age_months,
        age_bracket: AgeBracket::from_months(age_months),
        weight_kg: record.weight_kg,
        height_cm: record.height_cm,
        muac_cm: record.muac_cm,
        bmi,
        bmi_category: bmi.map(BmiCategory::from_bmi),
        gender: record.gender,
        income: record.income,
        has_edema: record.has_edema,
        weight_loss: record.weight_loss,
        feeding: record.feeding,
        physical_signs: record.physical_signs,
        dietary_diversity: record.dietary_diversity,
        clinical: record.clinical,
        allergies: record
            .allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect(),
        preferences: record
            .diet_preferences
            .iter()
            .filter_map(|p| DietaryPreference::parse(p))
            .collect(),
        avoid_foods: record
            .avoid_foods
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

/// Completed calendar months between two dates, clamped at zero.
fn age_in_months(birth: Date, reference: Date) -> u32 {
    let years = i32::from(reference.year()) - i32::from(birth.year());
    let mut months = years * 12 + i32::from(reference.month()) - i32::from(birth.month());
    if reference.day() < birth.day() {
        months -= 1;
    }
    months.max(0) as u32
}

fn opt_str(answers: &Map<String, Value>, key: &str) -> Option<String> {
    match answers.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() && s != "null" => {
            Some(s.trim().to_string())
        }
        _ => None,
    }
}

fn opt_f64(answers: &Map<String, Value>, key: &str) -> Option<f64> {
    let parsed = match answers.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite() && *v > 0.0)
}

fn opt_u8(answers: &Map<String, Value>, key: &str) -> Option<u8> {
    match answers.get(key) {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<u8>().ok(),
        _ => None,
    }
}

fn opt_bool(answers: &Map<String, Value>, key: &str) -> bool {
    match answers.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            let s = s.trim().to_lowercase();
            s == "true" || s == "yes" || s == "1"
        }
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

/// Yes/no answers stored as strings ("yes", "no").
fn opt_yes(answers: &Map<String, Value>, key: &str) -> bool {
    match answers.get(key) {
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("yes"),
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

fn opt_date(answers: &Map<String, Value>, key: &str) -> Option<Date> {
    opt_str(answers, key).and_then(|s| s.parse::<Date>().ok())
}

/// Accepts both a JSON array and a comma-separated string.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_gender(text: Option<&str>) -> Gender {
    match text.map(str::to_lowercase).as_deref() {
        Some("male") | Some("boy") | Some("m") => Gender::Male,
        Some("female") | Some("girl") | Some("f") => Gender::Female,
        _ => Gender::Unspecified,
    }
}

fn parse_income(text: Option<&str>) -> IncomeBracket {
    let Some(text) = text else {
        return IncomeBracket::Unspecified;
    };
    let t = text.to_lowercase();
    if t.contains("below") {
        IncomeBracket::Low
    } else if t.contains("12,031") || t.contains("12031") || t == "lower_middle" {
        IncomeBracket::LowerMiddle
    } else if t.contains("20,001") || t.contains("20001") || t == "middle" {
        IncomeBracket::Middle
    } else if t.contains("above") || t.contains("40,000") || t.contains("40000") || t == "high" {
        IncomeBracket::High
    } else if t == "low" {
        IncomeBracket::Low
    } else {
        IncomeBracket::Unspecified
    }
}

fn parse_weight_loss(text: Option<&str>) -> WeightLossBracket {
    let Some(text) = text else {
        return WeightLossBracket::Unspecified;
    };
    let t = text.to_lowercase();
    if t.contains(">10") || t.contains("10+") {
        WeightLossBracket::OverTenPercent
    } else if t.contains("5-10") {
        WeightLossBracket::FiveToTenPercent
    } else if t.contains("<5") || t.contains("none") {
        WeightLossBracket::UnderFivePercent
    } else {
        WeightLossBracket::Unspecified
    }
}

fn parse_feeding(text: Option<&str>) -> FeedingBehavior {
    let Some(text) = text else {
        return FeedingBehavior::Unspecified;
    };
    let t = text.to_lowercase();
    if t.contains("poor") {
        FeedingBehavior::PoorAppetite
    } else if t.contains("moderate") {
        FeedingBehavior::ModerateAppetite
    } else if t.contains("good") {
        FeedingBehavior::GoodAppetite
    } else {
        FeedingBehavior::Unspecified
    }
}

/// Accepts `["thin", "weak"]` or `"thin,weak"` or `"none"`.
fn parse_physical_signs(value: Option<&Value>) -> PhysicalSigns {
    let entries: Vec<String> = string_list(value)
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    PhysicalSigns {
        thin: entries.iter().any(|e| e.contains("thin")),
        shorter: entries.iter().any(|e| e.contains("short")),
        weak: entries.iter().any(|e| e.contains("weak")),
    }
}
