use nutriscreen_core::models::dish::Dish;

use super::dish;

pub(super) fn dishes() -> Vec<Dish> {
    vec![
        dish(
            "Ginisang Monggo",
            "🥣",
            "Mung beans stewed soft with malunggay leaves and garlic, a plant protein staple.",
            &["1 cup mung beans", "Malunggay leaves", "Garlic", "Onion", "Tomatoes"],
            &[
                "toddler", "preschool", "school-age", "adolescent",
                "high-protein", "iron-rich", "fiber-rich", "growth-support", "malnutrition",
                "low-cost",
                "vegetable", "soup", "boiled", "vegan", "vegetarian", "gluten-free", "traditional",
            ],
            &[],
        ),
        dish(
            "Laing",
            "🌿",
            "Dried taro leaves slow-cooked in coconut milk with chilies.",
            &["Dried taro leaves", "Coconut milk", "Chilies", "Ginger"],
            &[
                "adolescent",
                "iron-rich", "fiber-rich", "vitamin-a",
                "low-cost",
                "vegetable", "braised", "vegan", "vegetarian", "gluten-free", "traditional",
            ],
            &[],
        ),
        dish(
            "Pinakbet",
            "🥗",
            "Mixed native vegetables sautéed with shrimp paste: ampalaya, squash, okra, eggplant.",
            &["Ampalaya", "Squash", "Okra", "Eggplant", "String beans", "Shrimp paste"],
            &[
                "school-age", "adolescent",
                "vitamin-a", "vitamin-c", "fiber-rich",
                "low-cost",
                "vegetable", "boiled", "non-vegetarian", "traditional",
            ],
            &["Shellfish"],
        ),
        dish(
            "Ginisang Ampalaya",
            "🥬",
            "Bitter melon sautéed with egg, tomatoes, and onions.",
            &["2 ampalaya", "3 eggs", "Tomatoes", "Onions"],
            &[
                "school-age", "adolescent",
                "iron-rich", "vitamin-c", "low-carb",
                "low-cost",
                "vegetable", "fried", "vegetarian",
            ],
            &["Eggs"],
        ),
        dish(
            "Tortang Talong",
            "🍆",
            "Grilled eggplant flattened into a beaten-egg omelet and pan-fried.",
            &["2 eggplants", "3 eggs", "Salt", "Cooking oil"],
            &[
                "toddler", "preschool", "school-age", "adolescent",
                "high-protein", "fiber-rich", "soft", "kid-friendly",
                "low-cost",
                "vegetable", "fried", "vegetarian",
            ],
            &["Eggs"],
        ),
        dish(
            "Chopsuey",
            "🥦",
            "Stir-fried mixed vegetables in a light savory sauce.",
            &["Cauliflower", "Carrots", "Snow peas", "Cabbage", "Bell pepper"],
            &[
                "school-age", "adolescent",
                "vitamin-c", "fiber-rich", "balanced",
                "low-cost",
                "vegetable", "fried", "vegetarian",
            ],
            &[],
        ),
        dish(
            "Adobong Kangkong",
            "🥬",
            "Water spinach braised adobo-style in soy sauce, vinegar, and garlic.",
            &["2 bundles kangkong", "Soy sauce", "Vinegar", "Garlic"],
            &[
                "adolescent",
                "iron-rich", "fiber-rich",
                "free", "low-cost",
                "vegetable", "braised", "vegan", "vegetarian",
            ],
            &["Soy"],
        ),
        dish(
            "Ginataang Kalabasa at Sitaw",
            "🎃",
            "Squash and string beans simmered in coconut milk.",
            &["Squash", "String beans", "Coconut milk", "Garlic", "Onion"],
            &[
                "toddler", "preschool", "school-age", "adolescent",
                "vitamin-a", "fiber-rich", "energy-dense", "soft",
                "low-cost",
                "vegetable", "boiled", "vegan", "vegetarian", "gluten-free",
            ],
            &[],
        ),
        dish(
            "Tokwa at Gulay",
            "🥡",
            "Fried tofu cubes simmered with mixed vegetables in soy-garlic sauce.",
            &["3 blocks tofu", "Cabbage", "Carrots", "Soy sauce", "Garlic"],
            &[
                "school-age", "adolescent",
                "high-protein", "calcium-rich", "iron-rich",
                "low-cost",
                "vegetable", "fried", "vegan", "vegetarian",
            ],
            &["Soy"],
        ),
        dish(
            "Ensaladang Talong",
            "🍆",
            "Grilled eggplant salad with tomatoes, onions, and vinegar dressing.",
            &["2 eggplants", "Tomatoes", "Onions", "Vinegar"],
            &[
                "adolescent",
                "fiber-rich", "low-carb", "low-sodium",
                "free", "low-cost",
                "vegetable", "grilled", "vegan", "vegetarian", "gluten-free",
            ],
            &[],
        ),
        dish(
            "Mashed Kalabasa",
            "🎃",
            "Steamed squash mashed smooth, a first food rich in vitamin A.",
            &["Squash", "Water or breastmilk to thin"],
            &[
                "infant", "toddler-early",
                "pureed", "soft", "easy-digest", "vitamin-a", "low-sodium", "growth-support",
                "free", "low-cost",
                "vegetable", "boiled", "vegan", "vegetarian", "gluten-free",
            ],
            &[],
        ),
        dish(
            "Mashed Saging",
            "🍌",
            "Ripe saba banana mashed for weaning infants, naturally sweet and filling.",
            &["2 ripe saba bananas"],
            &[
                "infant", "toddler-early",
                "pureed", "soft", "easy-digest", "energy-dense", "high-energy", "growth-support",
                "kid-friendly",
                "free", "low-cost",
                "fruit", "vegan", "vegetarian", "gluten-free",
            ],
            &[],
        ),
    ]
}
