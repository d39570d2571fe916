use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One catalog entry. The name is the dish's identity: recommendation
/// lists are deduplicated by it and favorites reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dish {
    pub name: String,
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Lowercase tags: age bands, nutrition, cost tier, food category,
    /// cooking method, main ingredient.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl Dish {
    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Name, description, and tags joined and lowercased, for keyword
    /// heuristics over dishes whose tagging is incomplete.
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(
            self.name.len() + self.description.len() + self.tags.len() * 12,
        );
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.description);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }
}
