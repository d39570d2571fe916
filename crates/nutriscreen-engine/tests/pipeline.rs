//! End-to-end recommendation pipeline tests against the built-in catalog.

use jiff::civil::Date;
use serde_json::{json, Map, Value};

use nutriscreen_catalog::Catalog;
use nutriscreen_core::models::favorites::Favorites;
use nutriscreen_core::models::profile::NutritionalProfile;
use nutriscreen_engine::normalize::{normalize, record_from_answers};
use nutriscreen_engine::Engine;

fn profile_from(answers: Value, reference: Date) -> NutritionalProfile {
    let map: Map<String, Value> = answers.as_object().cloned().unwrap_or_default();
    let record = record_from_answers(&map, jiff::Timestamp::UNIX_EPOCH);
    normalize(&record, reference)
}

fn adult_profile() -> NutritionalProfile {
    profile_from(
        json!({
            "birthday": "1990-01-15",
            "weight": 58.0,
            "height": 163.0,
            "income": "below",
        }),
        Date::constant(2025, 6, 1),
    )
}

fn toddler_profile() -> NutritionalProfile {
    profile_from(
        json!({
            "birthday": "2022-12-01",
            "muac": 12.0,
            "income": "below",
        }),
        Date::constant(2025, 6, 1),
    )
}

#[test]
fn adult_with_nonempty_catalog_gets_recommendations() {
    let engine = Engine::new(Catalog::builtin());
    let list = engine.recommend(&adult_profile(), None);
    assert!(!list.is_empty());
}

#[test]
fn toddler_only_gets_toddler_tagged_dishes() {
    let engine = Engine::new(Catalog::builtin());
    let list = engine.recommend(&toddler_profile(), None);
    assert!(!list.is_empty());
    for item in &list.items {
        assert!(
            item.dish.has_tag("toddler"),
            "{} is not tagged for toddlers",
            item.dish.name
        );
    }
}

#[test]
fn output_respects_the_cap_and_has_no_duplicate_names() {
    let engine = Engine::new(Catalog::builtin());
    let list = engine.recommend(&adult_profile(), None);
    assert!(list.len() <= 25);

    let mut names: Vec<String> = list
        .dish_names()
        .iter()
        .map(|n| n.to_lowercase())
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), list.len());
}

#[test]
fn declared_allergies_exclude_matching_dishes() {
    let engine = Engine::new(Catalog::builtin());
    let mut profile = adult_profile();
    profile.allergies = vec!["peanuts".to_string()];

    let list = engine.recommend(&profile, None);
    assert!(!list.is_empty());
    for item in &list.items {
        assert!(
            !item
                .dish
                .allergens
                .iter()
                .any(|a| a.to_lowercase().contains("peanut")),
            "{} contains a declared allergen",
            item.dish.name
        );
    }
    assert!(!list.dish_names().contains(&"Kare-kare"));
}

#[test]
fn avoid_list_excludes_dishes_by_name() {
    let engine = Engine::new(Catalog::builtin());
    let mut profile = adult_profile();
    profile.avoid_foods = vec!["adobo".to_string()];

    let list = engine.recommend(&profile, None);
    for name in list.dish_names() {
        assert!(!name.to_lowercase().contains("adobo"));
    }
}

#[test]
fn vegan_with_peanut_allergy_excludes_both() {
    let engine = Engine::new(Catalog::builtin());
    let mut profile = profile_from(
        json!({
            "birthday": "1990-01-15",
            "income": "below",
            "diet_prefs": "vegan",
            "allergies": ["peanuts"],
        }),
        Date::constant(2025, 6, 1),
    );
    profile.physical_signs.thin = true;

    let list = engine.recommend(&profile, None);
    assert!(!list.is_empty());

    let names = list.dish_names();
    assert!(!names.contains(&"Kare-kare"));
    assert!(!names.contains(&"Adobo"));
    for item in &list.items {
        // Explicitly tagged vegan, or free of animal keywords.
        let plant_based = item.dish.has_tag("vegan") || {
            let text = item.dish.searchable_text();
            ["pork", "chicken", "beef", "meat", "egg", "cheese"]
                .iter()
                .all(|kw| !text.contains(kw))
        };
        assert!(plant_based, "{} is not a vegan dish", item.dish.name);
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let engine = Engine::new(Catalog::builtin());
    let profile = adult_profile();
    let first = engine.recommend(&profile, None);
    let second = engine.recommend(&profile, None);
    assert_eq!(first.dish_names(), second.dish_names());
}

#[test]
fn favorites_move_a_dish_up_the_list() {
    let json = r#"[
        {"name": "Lugaw", "icon": "", "description": "Plain rice porridge.",
         "tags": ["low-cost"], "allergens": []},
        {"name": "Arroz Caldo", "icon": "", "description": "Chicken rice porridge.",
         "tags": ["low-cost"], "allergens": []}
    ]"#;
    let catalog = Catalog::from_json_str(json).unwrap();
    let engine = Engine::new(&catalog);
    let profile = adult_profile();

    let plain = engine.recommend(&profile, None);
    assert_eq!(plain.dish_names(), vec!["Lugaw", "Arroz Caldo"]);

    let mut favorites = Favorites::default();
    favorites.add("Arroz Caldo", &[]);
    let boosted = engine.recommend(&profile, Some(&favorites));
    assert_eq!(boosted.dish_names(), vec!["Arroz Caldo", "Lugaw"]);
}

#[test]
fn every_recommendation_carries_an_explanation() {
    let engine = Engine::new(Catalog::builtin());
    let list = engine.recommend(&toddler_profile(), None);
    for item in &list.items {
        let text = item.explanation.as_deref().unwrap_or_default();
        assert!(!text.is_empty(), "{} has no explanation", item.dish.name);
    }
}

#[test]
fn empty_catalog_yields_an_empty_list() {
    let catalog = Catalog::new(Vec::new());
    let engine = Engine::new(&catalog);
    assert!(engine.recommend(&adult_profile(), None).is_empty());
    assert!(engine.default_recommendations().is_empty());
}

#[test]
fn default_recommendations_cover_users_without_screening_data() {
    let engine = Engine::new(Catalog::builtin());
    let list = engine.default_recommendations();
    assert!(list.len() >= 15);
    assert!(list.len() <= 20);
    assert!(list.dish_names().contains(&"Adobo"));
}
