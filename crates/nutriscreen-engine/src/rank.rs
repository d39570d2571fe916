//! Dish scoring and ranking.
//!
//! Additive scoring over the injected catalog. Age eligibility and the
//! allergen/avoid-list rules are hard filters; everything else only moves
//! a dish up or down the ordering. Sorting is stable so that equal scores
//! keep catalog order and repeated runs return identical lists.

use std::collections::HashSet;

use tracing::debug;

use nutriscreen_catalog::Catalog;
use nutriscreen_core::models::dish::Dish;
use nutriscreen_core::models::favorites::Favorites;
use nutriscreen_core::models::priority::PriorityTag;
use nutriscreen_core::models::profile::NutritionalProfile;
use nutriscreen_core::models::screening::IncomeBracket;

/// Ephemeral (dish, score) pair, discarded after one ranking pass.
#[derive(Debug)]
pub struct ScoredDish<'a> {
    pub dish: &'a Dish,
    pub score: f64,
    /// First priority whose catalog tag the dish matched.
    pub matched_priority: Option<PriorityTag>,
}

const PRIORITY_MATCH_POINTS: f64 = 50.0;
const EXTRA_PRIORITY_MATCH_POINTS: f64 = 15.0;
const ADULT_AGE_TAG_BONUS: f64 = 200.0;
const COST_MATCH_POINTS: f64 = 8.0;
const UNTAGGED_COST_POINTS: f64 = 5.0;
const EXTRA_DENSITY_POINTS: f64 = 10.0;
const FAVORITE_NAME_BONUS: f64 = 50.0;
const FAVORITE_TAG_POINTS: f64 = 3.0;
const FAVORITE_TAG_CAP: u32 = 3;

const COST_TAGS: &[&str] = &["free", "low-cost", "medium-cost", "high-cost"];

/// Tags that mark a dish as nutritionally dense.
const DENSITY_TAGS: &[&str] = &[
    "high-protein",
    "high-energy",
    "energy-dense",
    "iron-rich",
    "vitamin-a",
    "vitamin-c",
    "calcium-rich",
    "fiber-rich",
    "omega-3",
    "antioxidant",
];

/// Flat variety bonuses per distinct tag.
const CATEGORY_BONUS: &[(&str, f64)] = &[
    ("vegetarian", 5.0),
    ("vegan", 5.0),
    ("pescatarian", 5.0),
    ("traditional", 3.0),
];
const INGREDIENT_BONUS: &[(&str, f64)] = &[
    ("rice", 3.0),
    ("meat", 3.0),
    ("fish", 3.0),
    ("seafood", 3.0),
    ("soup", 3.0),
    ("vegetable", 3.0),
    ("fruit", 2.0),
    ("dessert", 2.0),
    ("snack", 2.0),
];
const METHOD_BONUS: &[(&str, f64)] = &[
    ("steamed", 2.0),
    ("fried", 2.0),
    ("grilled", 2.0),
    ("boiled", 2.0),
    ("braised", 2.0),
];

/// Cost-tier tags a given income bracket can match. `None` when the
/// bracket was not answered: cost then contributes nothing either way.
pub(crate) fn cost_tiers(income: IncomeBracket) -> Option<&'static [&'static str]> {
    match income {
        IncomeBracket::Low | IncomeBracket::LowerMiddle | IncomeBracket::Middle => {
            Some(&["free", "low-cost", "medium-cost"])
        }
        IncomeBracket::High => Some(&["free", "low-cost", "medium-cost", "high-cost"]),
        IncomeBracket::Unspecified => None,
    }
}

/// Score every eligible dish, sorted best-first.
pub fn rank<'a>(
    catalog: &'a Catalog,
    priorities: &[PriorityTag],
    profile: &NutritionalProfile,
    favorites: Option<&Favorites>,
) -> Vec<ScoredDish<'a>> {
    let tiers = cost_tiers(profile.income);
    let age_tag = profile.age_bracket.dish_tag();

    let mut scored: Vec<ScoredDish<'a>> = Vec::new();
    for dish in catalog.dishes() {
        if violates_exclusions(dish, profile) {
            debug!(dish = %dish.name, "excluded by allergen or avoid list");
            continue;
        }

        let mut score = 0.0;

        // Children only ever see dishes tagged for their bracket; adults
        // see everything, with a bonus for an explicit match.
        if profile.age_bracket.is_adult() {
            if dish.has_tag(age_tag) {
                score += ADULT_AGE_TAG_BONUS;
            }
        } else if !dish.has_tag(age_tag) {
            continue;
        }

        if let Some(tiers) = tiers {
            let cost_matches = tiers.iter().filter(|tier| dish.has_tag(tier)).count();
            if cost_matches > 0 {
                score += cost_matches as f64 * COST_MATCH_POINTS;
            } else if dish_has_cost_tag(dish) {
                // Tagged outside the permitted tiers, e.g. a high-cost dish
                // for a low-income household.
                continue;
            } else if profile.income.includes_untagged_dishes() {
                score += UNTAGGED_COST_POINTS;
            } else {
                continue;
            }
        }

        let mut matched_priority = None;
        let mut distinct_matches: HashSet<&'static str> = HashSet::new();
        for tag in priorities {
            if dish.has_tag(tag.dish_tag()) {
                score += PRIORITY_MATCH_POINTS;
                matched_priority.get_or_insert(*tag);
                distinct_matches.insert(tag.dish_tag());
            }
        }
        if distinct_matches.len() > 1 {
            score += (distinct_matches.len() - 1) as f64 * EXTRA_PRIORITY_MATCH_POINTS;
        }

        let density = DENSITY_TAGS.iter().filter(|tag| dish.has_tag(tag)).count();
        if density > 1 {
            score += (density - 1) as f64 * EXTRA_DENSITY_POINTS;
        }

        score += variety_bonus(dish);

        if let Some(favorites) = favorites {
            if favorites.contains_name(&dish.name) {
                score += FAVORITE_NAME_BONUS;
            }
            for tag in &dish.tags {
                let count = favorites.tag_count(tag).min(FAVORITE_TAG_CAP);
                score += f64::from(count) * FAVORITE_TAG_POINTS;
            }
        }

        scored.push(ScoredDish {
            dish,
            score,
            matched_priority,
        });
    }

    // Stable: ties keep catalog order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

fn dish_has_cost_tag(dish: &Dish) -> bool {
    COST_TAGS.iter().any(|tag| dish.has_tag(tag))
}

fn variety_bonus(dish: &Dish) -> f64 {
    let mut bonus = 0.0;
    for (tag, points) in CATEGORY_BONUS.iter().chain(INGREDIENT_BONUS).chain(METHOD_BONUS) {
        if dish.has_tag(tag) {
            bonus += points;
        }
    }
    bonus
}

/// Allergen and avoid-list rules: case-insensitive substring match in
/// either direction. These drop the dish entirely.
fn violates_exclusions(dish: &Dish, profile: &NutritionalProfile) -> bool {
    if !profile.allergies.is_empty() {
        let text = dish.searchable_text();
        for allergy in &profile.allergies {
            for allergen in &dish.allergens {
                let allergen = allergen.to_lowercase();
                if allergen.contains(allergy.as_str()) || allergy.contains(allergen.as_str()) {
                    return true;
                }
            }
            if text.contains(allergy.as_str()) {
                return true;
            }
        }
    }

    let name = dish.name.to_lowercase();
    profile
        .avoid_foods
        .iter()
        .any(|avoid| name.contains(avoid.as_str()) || avoid.contains(name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscreen_core::models::profile::AgeBracket;
    use nutriscreen_core::models::screening::{
        ClinicalFlags, FeedingBehavior, Gender, PhysicalSigns, WeightLossBracket,
    };

    fn profile(age_months: u32, income: IncomeBracket) -> NutritionalProfile {
        NutritionalProfile {
            age_months,
            age_bracket: AgeBracket::from_months(age_months),
            weight_kg: None,
            height_cm: None,
            muac_cm: None,
            bmi: None,
            bmi_category: None,
            gender: Gender::Unspecified,
            income,
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

    fn dish(name: &str, tags: &[&str], allergens: &[&str]) -> Dish {
        Dish {
            name: name.to_string(),
            icon: String::new(),
            description: format!("{name} test dish"),
            ingredients: Vec::new(),
            tags: tags.iter().map(|s| (*s).to_string()).collect(),
            allergens: allergens.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn children_only_get_age_tagged_dishes() {
        let catalog = Catalog::new(vec![
            dish("Tagged", &["toddler", "low-cost"], &[]),
            dish("Untagged", &["low-cost"], &[]),
        ]);
        let ranked = rank(&catalog, &[], &profile(30, IncomeBracket::Low), None);
        let names: Vec<&str> = ranked.iter().map(|s| s.dish.name.as_str()).collect();
        assert_eq!(names, vec!["Tagged"]);
    }

    #[test]
    fn adults_get_every_dish_with_a_bonus_for_age_match() {
        let catalog = Catalog::new(vec![
            dish("Plain", &["low-cost"], &[]),
            dish("ForAdults", &["adolescent", "low-cost"], &[]),
        ]);
        let ranked = rank(&catalog, &[], &profile(360, IncomeBracket::Low), None);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].dish.name, "ForAdults");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn priority_matches_accumulate_with_distinct_bonus() {
        let catalog = Catalog::new(vec![
            dish("Protein", &["high-protein", "low-cost"], &[]),
            dish("Both", &["high-protein", "iron-rich", "low-cost"], &[]),
        ]);
        let priorities = [PriorityTag::HighProtein, PriorityTag::IronRich];
        let ranked = rank(&catalog, &priorities, &profile(360, IncomeBracket::Low), None);
        assert_eq!(ranked[0].dish.name, "Both");
        // Both: 2×50 + 15 distinct bonus + density 10; Protein: 50.
        let delta = ranked[0].score - ranked[1].score;
        assert!((delta - 75.0).abs() < f64::EPSILON * 100.0);
    }

    #[test]
    fn duplicate_priorities_score_each_occurrence() {
        let catalog = Catalog::new(vec![dish("Protein", &["high-protein", "low-cost"], &[])]);
        let single = rank(
            &catalog,
            &[PriorityTag::HighProtein],
            &profile(360, IncomeBracket::Low),
            None,
        );
        let doubled = rank(
            &catalog,
            &[PriorityTag::HighProtein, PriorityTag::HighProtein],
            &profile(360, IncomeBracket::Low),
            None,
        );
        assert!(doubled[0].score > single[0].score);
    }

    #[test]
    fn untagged_dishes_survive_only_the_lowest_income_tier() {
        let catalog = Catalog::new(vec![dish("NoCostTag", &[], &[])]);

        let low = rank(&catalog, &[], &profile(360, IncomeBracket::Low), None);
        assert_eq!(low.len(), 1);
        assert!((low[0].score - UNTAGGED_COST_POINTS).abs() < f64::EPSILON);

        let lower_middle = rank(
            &catalog,
            &[],
            &profile(360, IncomeBracket::LowerMiddle),
            None,
        );
        assert!(lower_middle.is_empty());

        let high = rank(&catalog, &[], &profile(360, IncomeBracket::High), None);
        assert!(high.is_empty());
    }

    #[test]
    fn unanswered_income_neither_scores_nor_excludes_on_cost() {
        let catalog = Catalog::new(vec![
            dish("Pricey", &["high-cost"], &[]),
            dish("NoCostTag", &[], &[]),
        ]);
        let ranked = rank(&catalog, &[], &profile(360, IncomeBracket::Unspecified), None);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn out_of_tier_cost_tags_exclude_the_dish() {
        let catalog = Catalog::new(vec![dish("Pricey", &["high-cost"], &[])]);
        let ranked = rank(&catalog, &[], &profile(360, IncomeBracket::Low), None);
        assert!(ranked.is_empty());
    }

    #[test]
    fn allergen_match_is_a_hard_exclusion() {
        let catalog = Catalog::new(vec![
            dish("Kare-kare", &["high-protein", "low-cost"], &["Peanuts"]),
            dish("Tinola", &["high-protein", "low-cost"], &[]),
        ]);
        let mut p = profile(360, IncomeBracket::Low);
        p.allergies = vec!["peanut".to_string()];
        let ranked = rank(&catalog, &[PriorityTag::HighProtein], &p, None);
        let names: Vec<&str> = ranked.iter().map(|s| s.dish.name.as_str()).collect();
        assert_eq!(names, vec!["Tinola"]);
    }

    #[test]
    fn avoid_list_matches_dish_names_in_either_direction() {
        let catalog = Catalog::new(vec![
            dish("Adobong Pusit", &["low-cost"], &[]),
            dish("Tinola", &["low-cost"], &[]),
        ]);
        let mut p = profile(360, IncomeBracket::Low);
        p.avoid_foods = vec!["pusit".to_string()];
        let ranked = rank(&catalog, &[], &p, None);
        let names: Vec<&str> = ranked.iter().map(|s| s.dish.name.as_str()).collect();
        assert_eq!(names, vec!["Tinola"]);
    }

    #[test]
    fn favorites_boost_name_and_tags() {
        let catalog = Catalog::new(vec![
            dish("Plain", &["low-cost"], &[]),
            dish("Loved", &["low-cost"], &[]),
        ]);
        let mut favorites = Favorites::default();
        favorites.add("Loved", &[]);
        let ranked = rank(
            &catalog,
            &[],
            &profile(360, IncomeBracket::Low),
            Some(&favorites),
        );
        assert_eq!(ranked[0].dish.name, "Loved");

        // Tag preference counts are capped at three occurrences.
        let mut many = Favorites::default();
        for _ in 0..10 {
            many.add("Other", &["soup".to_string()]);
        }
        let soup_catalog = Catalog::new(vec![dish("Soupy", &["soup", "low-cost"], &[])]);
        let boosted = rank(
            &soup_catalog,
            &[],
            &profile(360, IncomeBracket::Low),
            Some(&many),
        );
        let plain = rank(&soup_catalog, &[], &profile(360, IncomeBracket::Low), None);
        let delta = boosted[0].score - plain[0].score;
        assert!((delta - 9.0).abs() < f64::EPSILON * 100.0);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            dish("First", &["low-cost"], &[]),
            dish("Second", &["low-cost"], &[]),
        ]);
        let ranked = rank(&catalog, &[], &profile(360, IncomeBracket::Low), None);
        let names: Vec<&str> = ranked.iter().map(|s| s.dish.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn identical_inputs_rank_identically() {
        let catalog = Catalog::builtin();
        let p = profile(360, IncomeBracket::Low);
        let priorities = [PriorityTag::HighProtein, PriorityTag::IronRich];
        let first: Vec<String> = rank(catalog, &priorities, &p, None)
            .iter()
            .map(|s| s.dish.name.clone())
            .collect();
        let second: Vec<String> = rank(catalog, &priorities, &p, None)
            .iter()
            .map(|s| s.dish.name.clone())
            .collect();
        assert_eq!(first, second);
    }
}
