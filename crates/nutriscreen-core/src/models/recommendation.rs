use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::dish::Dish;
use crate::models::priority::PriorityTag;

/// One recommended dish with the reason it was included.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub dish: Dish,
    /// The priority that triggered inclusion, when one matched.
    pub matched_priority: Option<PriorityTag>,
    pub explanation: Option<String>,
}

/// Ordered, name-deduplicated recommendation list — the engine's output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedRecommendationList {
    pub items: Vec<Recommendation>,
}

impl RankedRecommendationList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn dish_names(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.dish.name.as_str()).collect()
    }
}
