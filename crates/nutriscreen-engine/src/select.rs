//! Diversity-aware final selection.
//!
//! Small candidate sets pass through whole. Larger ones keep the top
//! scorers, then favor dishes that introduce a food category, cooking
//! method, or main ingredient not yet represented, and finally backfill
//! by score until the cap. Names are deduplicated at every step.

use std::collections::HashSet;

use nutriscreen_core::models::dish::Dish;

use crate::rank::ScoredDish;

/// Caps for the final list.
#[derive(Debug, Clone, Copy)]
pub struct SelectionLimits {
    /// Overall maximum list length.
    pub cap: usize,
    /// How many top scorers are taken before diversity is considered.
    pub top_unconditional: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            cap: 25,
            top_unconditional: 10,
        }
    }
}

const CATEGORY_DIMENSION: &[&str] = &[
    "vegetarian",
    "vegan",
    "pescatarian",
    "gluten-free",
    "dairy-free",
];
const METHOD_DIMENSION: &[&str] = &["steamed", "fried", "grilled", "boiled", "braised"];
const INGREDIENT_DIMENSION: &[&str] = &[
    "rice", "meat", "pork", "beef", "chicken", "fish", "seafood", "vegetable", "fruit", "soup",
    "dessert", "snack",
];

#[derive(Default)]
struct DiversityTracker {
    categories: HashSet<&'static str>,
    methods: HashSet<&'static str>,
    ingredients: HashSet<&'static str>,
}

impl DiversityTracker {
    fn track(&mut self, dish: &Dish) {
        for tag in CATEGORY_DIMENSION {
            if dish.has_tag(tag) {
                self.categories.insert(tag);
            }
        }
        for tag in METHOD_DIMENSION {
            if dish.has_tag(tag) {
                self.methods.insert(tag);
            }
        }
        for tag in INGREDIENT_DIMENSION {
            if dish.has_tag(tag) {
                self.ingredients.insert(tag);
            }
        }
    }

    fn adds_diversity(&self, dish: &Dish) -> bool {
        CATEGORY_DIMENSION
            .iter()
            .any(|tag| dish.has_tag(tag) && !self.categories.contains(tag))
            || METHOD_DIMENSION
                .iter()
                .any(|tag| dish.has_tag(tag) && !self.methods.contains(tag))
            || INGREDIENT_DIMENSION
                .iter()
                .any(|tag| dish.has_tag(tag) && !self.ingredients.contains(tag))
    }
}

/// Truncate a sorted candidate list to the configured cap.
pub fn select<'s, 'a>(
    ranked: &'s [ScoredDish<'a>],
    limits: &SelectionLimits,
) -> Vec<&'s ScoredDish<'a>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<&'s ScoredDish<'a>> = Vec::new();

    if ranked.len() <= limits.cap {
        for scored in ranked {
            if seen.insert(scored.dish.name.to_lowercase()) {
                out.push(scored);
            }
        }
        return out;
    }

    let mut tracker = DiversityTracker::default();

    for scored in ranked.iter().take(limits.top_unconditional) {
        if seen.insert(scored.dish.name.to_lowercase()) {
            out.push(scored);
            tracker.track(scored.dish);
        }
    }

    let rest = &ranked[limits.top_unconditional.min(ranked.len())..];

    for scored in rest {
        if out.len() >= limits.cap {
            break;
        }
        if seen.contains(&scored.dish.name.to_lowercase()) {
            continue;
        }
        if tracker.adds_diversity(scored.dish) {
            seen.insert(scored.dish.name.to_lowercase());
            out.push(scored);
            tracker.track(scored.dish);
        }
    }

    for scored in rest {
        if out.len() >= limits.cap {
            break;
        }
        if seen.insert(scored.dish.name.to_lowercase()) {
            out.push(scored);
        }
    }

    out
}
