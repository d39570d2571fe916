use nutriscreen_core::models::dish::Dish;

use super::dish;

pub(super) fn dishes() -> Vec<Dish> {
    vec![
        dish(
            "Inihaw na Bangus",
            "🐟",
            "Grilled milkfish stuffed with tomatoes and onions.",
            &["1 whole bangus", "Tomatoes", "Onions", "Calamansi"],
            &[
                "school-age", "adolescent",
                "high-protein", "omega-3", "low-carb",
                "low-cost",
                "fish", "grilled", "pescatarian", "traditional",
            ],
            &["Fish"],
        ),
        dish(
            "Fried Tilapia",
            "🐟",
            "Whole tilapia fried crisp, served with a soy-vinegar dip.",
            &["2 whole tilapia", "Salt", "Cooking oil"],
            &[
                "preschool", "school-age", "adolescent",
                "high-protein", "omega-3",
                "low-cost",
                "fish", "fried", "pescatarian",
            ],
            &["Fish"],
        ),
        dish(
            "Paksiw na Isda",
            "🍲",
            "Fish simmered in vinegar with ginger, ampalaya, and eggplant.",
            &["500g fish", "Vinegar", "Ginger", "Ampalaya", "Eggplant"],
            &[
                "school-age", "adolescent",
                "high-protein", "omega-3", "easy-digest",
                "low-cost",
                "fish", "boiled", "pescatarian", "traditional",
            ],
            &["Fish"],
        ),
        dish(
            "Sardinas con Miswa",
            "🥣",
            "Canned sardines simmered with fine wheat noodles, a quick budget soup.",
            &["1 can sardines", "Miswa noodles", "Onion", "Garlic"],
            &[
                "school-age", "adolescent",
                "high-protein", "calcium-rich", "omega-3",
                "low-cost",
                "fish", "soup", "boiled", "pescatarian",
            ],
            &["Fish", "Wheat"],
        ),
        dish(
            "Ginataang Hipon",
            "🦐",
            "Shrimp cooked in coconut milk with squash and string beans.",
            &["400g shrimp", "Coconut milk", "Squash", "String beans"],
            &[
                "adolescent",
                "high-protein", "vitamin-a",
                "medium-cost",
                "seafood", "boiled", "pescatarian",
            ],
            &["Shellfish"],
        ),
        dish(
            "Fish Balls",
            "🍡",
            "Street-style fried fish balls on skewers with sweet sauce.",
            &["Fish ball pack", "Cooking oil", "Sweet sauce"],
            &[
                "school-age", "adolescent",
                "bite-sized", "kid-friendly",
                "low-cost",
                "fish", "snack", "fried", "pescatarian",
            ],
            &["Fish", "Wheat"],
        ),
        dish(
            "Ukoy",
            "🍤",
            "Crisp shrimp and vegetable fritters, eaten with spiced vinegar.",
            &["Small shrimp", "Flour", "Squash strips", "Bean sprouts"],
            &[
                "adolescent",
                "high-protein",
                "low-cost",
                "seafood", "snack", "fried", "pescatarian", "traditional",
            ],
            &["Shellfish", "Wheat"],
        ),
    ]
}
