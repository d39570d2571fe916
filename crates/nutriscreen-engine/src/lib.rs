//! nutriscreen-engine
//!
//! The synchronous scoring and recommendation pipeline: screening answers
//! are normalized into a profile, scored for malnutrition risk, expanded
//! into nutritional priorities, and matched against a dish catalog to
//! produce a ranked, diversity-aware recommendation list.
//!
//! The whole pipeline is a pure function of its inputs: no I/O, no caching,
//! no wall-clock reads, and no path that panics or returns an error.
//! Malformed input degrades to documented defaults instead.

pub mod dietary;
pub mod explain;
pub mod normalize;
pub mod priority;
pub mod rank;
pub mod risk;
pub mod select;

use nutriscreen_catalog::Catalog;
use nutriscreen_core::models::favorites::Favorites;
use nutriscreen_core::models::profile::NutritionalProfile;
use nutriscreen_core::models::recommendation::{RankedRecommendationList, Recommendation};
use nutriscreen_core::models::risk::RiskScore;
use tracing::debug;

use crate::select::SelectionLimits;

/// Dish names shown when no screening data exists yet.
const POPULAR_DISHES: &[&str] = &[
    "Steamed Rice",
    "Adobo",
    "Sinigang na Baboy",
    "Tinola",
    "Kare-kare",
    "Lechon Manok",
    "Chicken Inasal",
    "Bulalo",
    "Nilagang Baka",
    "Pancit Canton",
    "Arroz Caldo",
    "Champorado",
    "Halo-halo",
    "Biko",
    "Bibingka",
    "Sinangag",
    "Lumpiang Shanghai",
    "Fish Balls",
    "Ukoy",
    "Fresh Lumpia",
];

const DEFAULT_RECOMMENDATIONS_MIN: usize = 15;
const DEFAULT_RECOMMENDATIONS_CAP: usize = 20;

/// Recommendation engine over a borrowed, read-only catalog. Holds no
/// mutable state, so one instance can serve concurrent requests.
pub struct Engine<'a> {
    catalog: &'a Catalog,
    limits: SelectionLimits,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            limits: SelectionLimits::default(),
        }
    }

    pub fn with_limits(catalog: &'a Catalog, limits: SelectionLimits) -> Self {
        Self { catalog, limits }
    }

    /// Score a profile for malnutrition risk.
    pub fn assess(&self, profile: &NutritionalProfile) -> RiskScore {
        risk::assess(profile)
    }

    /// Run the full pipeline: risk → priorities → ranking → dietary filter
    /// → diversity selection → explanations.
    pub fn recommend(
        &self,
        profile: &NutritionalProfile,
        favorites: Option<&Favorites>,
    ) -> RankedRecommendationList {
        let risk = risk::assess(profile);
        let priorities = priority::derive(profile, &risk);
        debug!(score = risk.score, priorities = priorities.len(), "derived priorities");

        let ranked = rank::rank(self.catalog, &priorities, profile, favorites);
        let filtered = dietary::filter(ranked, profile, &priorities);
        let selected = select::select(&filtered, &self.limits);
        debug!(selected = selected.len(), "selection complete");

        let items = selected
            .into_iter()
            .map(|scored| Recommendation {
                dish: scored.dish.clone(),
                matched_priority: scored.matched_priority,
                explanation: Some(explain::explanation(
                    scored.dish,
                    &risk,
                    profile.age_bracket,
                )),
            })
            .collect();

        RankedRecommendationList { items }
    }

    /// Curated fallback list for users without screening data: popular
    /// dishes first, backfilled from the catalog in stable order.
    pub fn default_recommendations(&self) -> RankedRecommendationList {
        let mut items: Vec<Recommendation> = Vec::new();

        for name in POPULAR_DISHES {
            if let Some(dish) = self.catalog.get(name) {
                items.push(Recommendation {
                    dish: dish.clone(),
                    matched_priority: None,
                    explanation: None,
                });
            }
        }

        if items.len() < DEFAULT_RECOMMENDATIONS_MIN {
            for dish in self.catalog.dishes() {
                if items.len() >= DEFAULT_RECOMMENDATIONS_CAP {
                    break;
                }
                if items.iter().any(|r| r.dish.name.eq_ignore_ascii_case(&dish.name)) {
                    continue;
                }
                items.push(Recommendation {
                    dish: dish.clone(),
                    matched_priority: None,
                    explanation: None,
                });
            }
        }

        items.truncate(DEFAULT_RECOMMENDATIONS_CAP);
        RankedRecommendationList { items }
    }
}
