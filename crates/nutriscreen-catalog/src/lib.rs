//! nutriscreen-catalog
//!
//! Dish reference data: the `Catalog` container plus the built-in Filipino
//! dish set. Pure data — no scoring logic. The engine receives a borrowed
//! `Catalog` and never mutates it.

pub mod dishes;
pub mod error;

use std::sync::LazyLock;

use nutriscreen_core::models::dish::Dish;
use tracing::warn;

use crate::error::CatalogError;

/// Immutable, name-deduplicated dish collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// Build a catalog from raw entries. Duplicate names are absorbed with
    /// first-occurrence precedence; an empty input is a legal catalog.
    pub fn new(entries: Vec<Dish>) -> Self {
        let mut dishes: Vec<Dish> = Vec::with_capacity(entries.len());
        for dish in entries {
            if dishes.iter().any(|d| d.name.eq_ignore_ascii_case(&dish.name)) {
                warn!(name = %dish.name, "duplicate dish name in catalog, keeping first occurrence");
                continue;
            }
            dishes.push(dish);
        }
        Self { dishes }
    }

    /// Parse a catalog from a JSON array of dishes. Only malformed JSON is
    /// an error; semantic anomalies (duplicates) are absorbed by `new`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Dish> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// The built-in dish set, constructed once per process.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(dishes::builtin_dishes()));
        &BUILTIN
    }

    /// Dishes in stable catalog order.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
