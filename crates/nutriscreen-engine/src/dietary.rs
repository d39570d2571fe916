//! Dietary-preference filtering.
//!
//! Runs after ranking as its own stage. Explicit catalog tags always win;
//! keyword heuristics cover dishes whose tagging is incomplete. Filtering
//! degrades in three ordered tiers so an incomplete catalog can thin the
//! list but never empty it: strict, smart-combination, then lenient.

use tracing::debug;

use nutriscreen_core::models::dish::Dish;
use nutriscreen_core::models::preferences::DietaryPreference;
use nutriscreen_core::models::priority::PriorityTag;
use nutriscreen_core::models::profile::NutritionalProfile;

use crate::rank::ScoredDish;

/// Below this many strict results the lenient tier kicks in.
pub const MIN_STRICT_RESULTS: usize = 5;

const MEAT_KEYWORDS: &[&str] = &["chicken", "beef", "pork", "fish", "meat", "liver"];
const ANIMAL_PRODUCT_KEYWORDS: &[&str] = &["milk", "cheese", "egg", "butter", "yogurt", "honey"];
const FISH_KEYWORDS: &[&str] = &[
    "fish", "bangus", "tilapia", "galunggong", "sardinas", "hipon", "shrimp", "seafood",
];
const GLUTEN_KEYWORDS: &[&str] = &["wheat", "flour", "bread", "noodles", "pasta", "pancit", "pansit"];
const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "butter", "yogurt", "cream", "gatas"];
const NUT_KEYWORDS: &[&str] = &["peanut", "cashew", "almond", "walnut", "pili", "mani"];

/// Keyword tables for the smart-combination tier.
const PLANT_PROTEIN_KEYWORDS: &[&str] = &[
    "bean", "legume", "tofu", "tokwa", "tempeh", "lentil", "chickpea", "mung", "monggo", "soy",
    "edamame", "quinoa",
];
const ENERGY_PLANT_KEYWORDS: &[&str] = &[
    "banana", "saging", "avocado", "coconut", "nut", "seed", "sweet potato", "kamote", "yam",
    "cassava", "plantain",
];
const IRON_PLANT_KEYWORDS: &[&str] = &[
    "spinach", "kale", "malunggay", "moringa", "bean", "legume", "lentil", "chickpea", "tofu",
    "tokwa", "monggo", "mung",
];
const VITAMIN_PLANT_KEYWORDS: &[&str] = &[
    "carrot", "sweet potato", "kamote", "pumpkin", "squash", "kalabasa", "mango", "papaya",
    "orange", "guava", "bell pepper", "broccoli", "spinach", "kale", "malunggay", "moringa",
];

/// Lenient-tier plant/animal indicator lists.
const PLANT_KEYWORDS: &[&str] = &[
    "vegetable", "fruit", "grain", "bean", "legume", "rice", "corn", "potato", "tomato", "onion",
    "garlic", "ginger", "coconut", "ampalaya", "sayote", "repolyo", "cabbage", "carrot", "chayote",
    "bitter", "mung", "taro", "leaf",
];
const ANIMAL_KEYWORDS: &[&str] = &[
    "meat", "chicken", "beef", "pork", "fish", "egg", "milk", "cheese", "butter", "yogurt",
    "liver", "blood", "intestine", "tripe",
];

/// Apply the declared preferences to an already-ranked candidate list.
/// Smart-combination matches order first, then plain strict matches; the
/// lenient tier replaces the result only when strict filtering starves it.
pub fn filter<'a>(
    candidates: Vec<ScoredDish<'a>>,
    profile: &NutritionalProfile,
    priorities: &[PriorityTag],
) -> Vec<ScoredDish<'a>> {
    if profile.preferences.is_empty() {
        return candidates;
    }

    let mut smart: Vec<ScoredDish<'a>> = Vec::new();
    let mut standard: Vec<ScoredDish<'a>> = Vec::new();
    let mut rejected: Vec<ScoredDish<'a>> = Vec::new();

    for scored in candidates {
        if satisfies_all(scored.dish, &profile.preferences) {
            if is_smart_match(scored.dish, &profile.preferences, priorities) {
                smart.push(scored);
            } else {
                standard.push(scored);
            }
        } else {
            rejected.push(scored);
        }
    }

    let strict_total = smart.len() + standard.len();
    if strict_total < MIN_STRICT_RESULTS {
        debug!(
            strict = strict_total,
            "strict dietary filtering too thin, applying lenient tier"
        );
        let mut lenient: Vec<ScoredDish<'a>> = Vec::new();
        for scored in smart.into_iter().chain(standard).chain(rejected) {
            if lenient_satisfies(scored.dish, &profile.preferences) {
                lenient.push(scored);
            }
        }
        lenient.sort_by(|a, b| b.score.total_cmp(&a.score));
        return lenient;
    }

    smart.extend(standard);
    smart
}

/// Strict tier: explicit tags win, keyword heuristics otherwise.
fn satisfies_all(dish: &Dish, preferences: &[DietaryPreference]) -> bool {
    preferences.iter().all(|pref| satisfies(dish, *pref))
}

fn satisfies(dish: &Dish, pref: DietaryPreference) -> bool {
    // An explicit "non-<preference>" tag vetoes the dish no matter what
    // the heuristics would say; an exact tag admits it the same way.
    if dish.has_tag(&format!("non-{}", pref.tag())) {
        return false;
    }
    if dish.has_tag(pref.tag()) {
        return true;
    }

    let text = dish.searchable_text();
    match pref {
        DietaryPreference::Vegetarian => !contains_any(&text, MEAT_KEYWORDS),
        DietaryPreference::Vegan => {
            !contains_any(&text, MEAT_KEYWORDS) && !contains_any(&text, ANIMAL_PRODUCT_KEYWORDS)
        }
        DietaryPreference::Pescatarian => {
            !contains_any(&text, MEAT_KEYWORDS) || contains_any(&text, FISH_KEYWORDS)
        }
        DietaryPreference::GlutenFree => !contains_any(&text, GLUTEN_KEYWORDS),
        DietaryPreference::DairyFree => !contains_any(&text, DAIRY_KEYWORDS),
        DietaryPreference::NutFree => !contains_any(&text, NUT_KEYWORDS),
    }
}

/// Smart tier: a plant-based preference combined with a nutritional
/// priority picks out dishes that serve both at once.
fn is_smart_match(dish: &Dish, preferences: &[DietaryPreference], priorities: &[PriorityTag]) -> bool {
    let plant_based = preferences
        .iter()
        .any(|p| matches!(p, DietaryPreference::Vegetarian | DietaryPreference::Vegan));
    if !plant_based {
        return false;
    }

    let text = dish.searchable_text();

    let wants_protein = priorities.iter().any(|p| {
        matches!(p, PriorityTag::HighProtein | PriorityTag::ProteinEnergyDeficiency)
    });
    if wants_protein && (contains_any(&text, PLANT_PROTEIN_KEYWORDS) || dish.has_tag("high-protein"))
    {
        return true;
    }

    let wants_energy = priorities.iter().any(|p| {
        matches!(
            p,
            PriorityTag::HighEnergy | PriorityTag::EnergyDense | PriorityTag::WeightGain
        )
    });
    if wants_energy
        && (contains_any(&text, ENERGY_PLANT_KEYWORDS)
            || dish.has_tag("high-energy")
            || dish.has_tag("energy-dense"))
    {
        return true;
    }

    let wants_iron = priorities.iter().any(|p| matches!(p, PriorityTag::IronRich));
    if wants_iron && (contains_any(&text, IRON_PLANT_KEYWORDS) || dish.has_tag("iron-rich")) {
        return true;
    }

    let wants_vitamins = priorities
        .iter()
        .any(|p| matches!(p, PriorityTag::VitaminA | PriorityTag::VitaminC));
    if wants_vitamins
        && (contains_any(&text, VITAMIN_PLANT_KEYWORDS)
            || dish.has_tag("vitamin-a")
            || dish.has_tag("vitamin-c"))
    {
        return true;
    }

    false
}

/// Lenient tier: vegetarian relaxes to "primarily plant-based"; vegan and
/// everything else keep their strict rule.
fn lenient_satisfies(dish: &Dish, preferences: &[DietaryPreference]) -> bool {
    preferences.iter().all(|pref| match pref {
        DietaryPreference::Vegetarian => {
            primarily_plant_based(dish) || satisfies(dish, *pref)
        }
        _ => satisfies(dish, *pref),
    })
}

/// A dish counts as primarily plant-based when plant indicators appear and
/// animal indicators do not dominate.
fn primarily_plant_based(dish: &Dish) -> bool {
    let text = dish.searchable_text();
    let plant = PLANT_KEYWORDS.iter().filter(|k| text.contains(**k)).count();
    let animal = ANIMAL_KEYWORDS.iter().filter(|k| text.contains(**k)).count();
    plant > 0 && (plant >= animal || animal <= 1)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
