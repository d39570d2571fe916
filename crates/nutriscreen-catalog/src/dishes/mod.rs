//! Built-in Filipino dish data, grouped by kind. Tags are lowercase and
//! drawn from the fixed vocabulary the engine matches against: age bands,
//! nutrition, cost tier, dietary category, cooking method, main ingredient.

mod mains;
mod rice_and_porridge;
mod seafood;
mod snacks_and_desserts;
mod vegetables;

use nutriscreen_core::models::dish::Dish;

pub(crate) fn builtin_dishes() -> Vec<Dish> {
    let mut dishes = Vec::new();
    dishes.extend(rice_and_porridge::dishes());
    dishes.extend(mains::dishes());
    dishes.extend(seafood::dishes());
    dishes.extend(vegetables::dishes());
    dishes.extend(snacks_and_desserts::dishes());
    dishes
}

pub(super) fn dish(
    name: &str,
    icon: &str,
    description: &str,
    ingredients: &[&str],
    tags: &[&str],
    allergens: &[&str],
) -> Dish {
    Dish {
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        ingredients: ingredients.iter().map(|s| (*s).to_string()).collect(),
        tags: tags.iter().map(|s| (*s).to_string()).collect(),
        allergens: allergens.iter().map(|s| (*s).to_string()).collect(),
    }
}
