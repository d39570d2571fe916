use nutriscreen_core::models::dish::Dish;

use super::dish;

pub(super) fn dishes() -> Vec<Dish> {
    vec![
        dish(
            "Lumpiang Shanghai",
            "🥟",
            "Crisp fried spring rolls filled with seasoned ground pork.",
            &["400g ground pork", "Lumpia wrappers", "Carrots", "Onion"],
            &[
                "preschool", "school-age", "adolescent",
                "high-protein", "bite-sized", "kid-friendly",
                "low-cost",
                "pork", "snack", "fried", "non-vegetarian",
            ],
            &["Pork", "Meat", "Wheat"],
        ),
        dish(
            "Fresh Lumpia",
            "🌯",
            "Soft crepe wrapped around sautéed vegetables, served with sweet peanut-garlic sauce.",
            &["Lumpia crepe", "Ubod", "Carrots", "Lettuce", "Peanut sauce"],
            &[
                "school-age", "adolescent",
                "fiber-rich", "vitamin-a",
                "low-cost",
                "vegetable", "snack", "vegetarian", "traditional",
            ],
            &["Wheat", "Peanuts"],
        ),
        dish(
            "Taho",
            "🥛",
            "Warm silken tofu with arnibal syrup and sago pearls, sold fresh each morning.",
            &["Silken tofu", "Brown sugar syrup", "Sago pearls"],
            &[
                "toddler-early", "toddler", "preschool", "school-age",
                "high-protein", "calcium-rich", "soft", "easy-digest",
                "growth-support", "kid-friendly",
                "free", "low-cost",
                "snack", "vegetarian", "gluten-free", "traditional",
            ],
            &["Soy"],
        ),
        dish(
            "Turon",
            "🍌",
            "Saba banana and jackfruit rolled in a wrapper, fried, and glazed with caramel.",
            &["Saba bananas", "Jackfruit strips", "Lumpia wrappers", "Brown sugar"],
            &[
                "school-age", "adolescent",
                "energy-dense", "kid-friendly",
                "low-cost",
                "fruit", "snack", "fried", "vegan", "vegetarian",
            ],
            &["Wheat"],
        ),
        dish(
            "Pandesal",
            "🍞",
            "Soft, slightly sweet bread rolls baked fresh at dawn.",
            &["Flour", "Yeast", "Sugar", "Salt", "Breadcrumbs"],
            &[
                "school-age", "adolescent",
                "energy-dense", "high-energy",
                "low-cost",
                "snack", "vegetarian",
            ],
            &["Wheat"],
        ),
        dish(
            "Biko",
            "🍮",
            "Sticky rice cake cooked in coconut milk and brown sugar.",
            &["Glutinous rice", "Coconut milk", "Brown sugar"],
            &[
                "school-age", "adolescent",
                "energy-dense", "high-energy", "kid-friendly", "gluten-free",
                "low-cost",
                "rice", "dessert", "boiled", "vegan", "vegetarian", "traditional",
            ],
            &[],
        ),
        dish(
            "Bibingka",
            "🥮",
            "Rice cake baked in banana leaves, topped with salted egg and cheese.",
            &["Rice flour", "Coconut milk", "Salted egg", "Cheese", "Banana leaves"],
            &[
                "adolescent",
                "calcium-rich", "energy-dense",
                "medium-cost",
                "rice", "dessert", "vegetarian", "traditional",
            ],
            &["Eggs", "Milk"],
        ),
        dish(
            "Halo-halo",
            "🍧",
            "Layered shaved-ice dessert with sweet beans, fruits, leche flan, and ube.",
            &["Shaved ice", "Evaporated milk", "Sweet beans", "Leche flan", "Ube halaya"],
            &[
                "school-age", "adolescent",
                "kid-friendly",
                "medium-cost",
                "dessert", "vegetarian", "traditional",
            ],
            &["Milk", "Eggs"],
        ),
    ]
}
