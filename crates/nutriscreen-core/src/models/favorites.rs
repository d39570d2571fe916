use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user's favorited dishes: exact names plus how often each tag occurs
/// across the favorites, used to nudge ranking toward similar dishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Favorites {
    pub names: HashSet<String>,
    pub tag_counts: HashMap<String, u32>,
}

impl Favorites {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.tag_counts.is_empty()
    }

    /// Record one favorited dish.
    pub fn add(&mut self, name: &str, tags: &[String]) {
        self.names.insert(name.to_string());
        for tag in tags {
            *self.tag_counts.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn tag_count(&self, tag: &str) -> u32 {
        self.tag_counts.get(&tag.to_lowercase()).copied().unwrap_or(0)
    }
}
