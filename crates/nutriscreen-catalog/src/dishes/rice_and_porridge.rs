use nutriscreen_core::models::dish::Dish;

use super::dish;

pub(super) fn dishes() -> Vec<Dish> {
    vec![
        dish(
            "Steamed Rice",
            "🍚",
            "Plain steamed white rice, the staple base of every Filipino meal.",
            &["2 cups white rice", "2.5 cups water"],
            &[
                "preschool", "school-age", "adolescent",
                "balanced", "gluten-free", "low-sodium",
                "free", "low-cost",
                "rice", "steamed", "vegan", "traditional",
            ],
            &[],
        ),
        dish(
            "Sinangag",
            "🍳",
            "Garlic fried rice made from day-old rice, a breakfast staple.",
            &["3 cups day-old rice", "6 garlic cloves", "2 tbsp cooking oil", "Salt"],
            &[
                "school-age", "adolescent",
                "energy-dense", "high-energy",
                "low-cost",
                "rice", "fried", "vegan", "traditional",
            ],
            &[],
        ),
        dish(
            "Lugaw",
            "🥣",
            "Plain rice porridge simmered until silky, easy on small or upset stomachs.",
            &["1 cup rice", "6 cups water", "Ginger", "Salt"],
            &[
                "infant", "toddler-early", "toddler",
                "pureed", "soft", "easy-digest", "growth-support", "gluten-free",
                "free", "low-cost",
                "rice", "boiled", "vegan", "traditional",
            ],
            &[],
        ),
        dish(
            "Arroz Caldo",
            "🍲",
            "Chicken rice porridge with ginger and garlic, topped with a boiled egg.",
            &[
                "1 cup rice", "300g chicken thighs", "Ginger", "Garlic",
                "Fish sauce", "2 boiled eggs", "Spring onions",
            ],
            &[
                "toddler-early", "toddler", "preschool", "school-age", "adolescent",
                "soft", "easy-digest", "high-protein", "growth-support",
                "malnutrition", "kid-friendly",
                "low-cost",
                "rice", "chicken", "soup", "boiled", "traditional",
            ],
            &["Eggs", "Fish sauce"],
        ),
        dish(
            "Champorado",
            "🍫",
            "Sweet chocolate rice porridge made with native cacao, served with evaporated milk.",
            &["1 cup glutinous rice", "4 tbsp tablea cacao", "Sugar", "Evaporated milk"],
            &[
                "toddler", "preschool", "school-age",
                "soft", "easy-digest", "energy-dense", "high-energy", "kid-friendly",
                "low-cost",
                "rice", "dessert", "boiled", "vegetarian", "traditional",
            ],
            &["Milk"],
        ),
        dish(
            "Ginataang Mais",
            "🌽",
            "Corn and glutinous rice simmered in coconut milk, lightly sweetened.",
            &["1 cup glutinous rice", "1 cup sweet corn", "2 cups coconut milk", "Sugar"],
            &[
                "infant", "toddler-early", "toddler",
                "soft", "easy-digest", "energy-dense", "high-energy", "kid-friendly", "gluten-free",
                "low-cost",
                "rice", "dessert", "boiled", "vegan",
            ],
            &[],
        ),
        dish(
            "Pancit Canton",
            "🍜",
            "Stir-fried wheat noodles with pork, shrimp, and mixed vegetables.",
            &[
                "250g canton noodles", "100g pork", "100g shrimp",
                "Cabbage", "Carrots", "Soy sauce",
            ],
            &[
                "school-age", "adolescent",
                "balanced",
                "low-cost",
                "snack", "fried", "non-vegetarian", "traditional",
            ],
            &["Wheat", "Soy", "Shellfish"],
        ),
    ]
}
