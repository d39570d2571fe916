use nutriscreen_core::models::dish::Dish;

use super::dish;

pub(super) fn dishes() -> Vec<Dish> {
    vec![
        dish(
            "Adobo",
            "🍖",
            "Pork or chicken braised in soy sauce, vinegar, garlic, and bay leaves until tender.",
            &[
                "500g pork shoulder or chicken thighs", "60ml soy sauce", "60ml vinegar",
                "6 garlic cloves", "2 bay leaves", "Black peppercorns",
            ],
            &[
                "school-age", "adolescent",
                "high-protein", "iron-rich", "low-carb",
                "low-cost", "medium-cost",
                "meat", "pork", "braised", "non-vegetarian", "traditional",
            ],
            &["Soy", "Meat"],
        ),
        dish(
            "Sinigang na Baboy",
            "🍲",
            "Sour tamarind soup with pork, kangkong, radish, and eggplant.",
            &[
                "500g pork ribs", "Tamarind", "Kangkong", "Radish",
                "Eggplant", "Tomatoes", "Fish sauce",
            ],
            &[
                "school-age", "adolescent",
                "high-protein", "vitamin-c", "fiber-rich",
                "low-cost",
                "pork", "soup", "boiled", "non-vegetarian", "traditional",
            ],
            &["Pork", "Meat", "Fish sauce"],
        ),
        dish(
            "Tinola",
            "🍗",
            "Ginger chicken soup with green papaya and malunggay leaves.",
            &[
                "500g chicken", "Green papaya", "Malunggay leaves",
                "Ginger", "Fish sauce",
            ],
            &[
                "toddler", "preschool", "school-age", "adolescent",
                "high-protein", "vitamin-a", "vitamin-c", "easy-digest", "growth-support",
                "low-cost",
                "chicken", "soup", "boiled", "non-vegetarian", "traditional",
            ],
            &["Meat", "Fish sauce"],
        ),
        dish(
            "Kare-kare",
            "🥘",
            "Oxtail and vegetables in a rich peanut sauce, served with shrimp paste.",
            &[
                "1kg oxtail", "Peanut butter", "Eggplant", "String beans",
                "Bok choy", "Shrimp paste", "Annatto",
            ],
            &[
                "adolescent",
                "high-protein", "iron-rich", "energy-dense", "high-energy",
                "medium-cost", "high-cost",
                "meat", "beef", "braised", "non-vegetarian", "traditional",
            ],
            &["Beef", "Meat", "Peanuts", "Shellfish"],
        ),
        dish(
            "Bulalo",
            "🍖",
            "Beef shank and marrow bone soup with corn, cabbage, and potatoes.",
            &[
                "1kg beef marrow bones", "500g beef shank", "Corn cobs",
                "Cabbage", "Potatoes", "Fish sauce",
            ],
            &[
                "adolescent",
                "high-protein", "iron-rich", "calcium-rich", "energy-dense", "high-energy",
                "malnutrition",
                "high-cost",
                "beef", "soup", "boiled", "non-vegetarian", "traditional",
            ],
            &["Beef", "Meat", "Fish sauce"],
        ),
        dish(
            "Nilagang Baka",
            "🍲",
            "Clear boiled beef soup with potatoes, cabbage, and pechay.",
            &["500g beef brisket", "Potatoes", "Cabbage", "Pechay", "Peppercorns"],
            &[
                "school-age", "adolescent",
                "high-protein", "iron-rich", "easy-digest",
                "medium-cost",
                "beef", "soup", "boiled", "non-vegetarian", "traditional",
            ],
            &["Beef", "Meat"],
        ),
        dish(
            "Bistek Tagalog",
            "🥩",
            "Thin beef slices braised in soy sauce and calamansi, topped with onion rings.",
            &["500g beef sirloin", "Soy sauce", "Calamansi", "Onions"],
            &[
                "adolescent",
                "high-protein", "iron-rich", "low-carb",
                "medium-cost",
                "beef", "braised", "non-vegetarian", "traditional",
            ],
            &["Beef", "Meat", "Soy"],
        ),
        dish(
            "Lechon Manok",
            "🍗",
            "Whole roast chicken marinated in lemongrass and calamansi.",
            &["1 whole chicken", "Lemongrass", "Calamansi", "Garlic"],
            &[
                "school-age", "adolescent",
                "high-protein", "low-carb",
                "medium-cost",
                "chicken", "grilled", "non-vegetarian",
            ],
            &["Meat"],
        ),
        dish(
            "Chicken Inasal",
            "🍢",
            "Grilled chicken marinated in vinegar, calamansi, and annatto oil.",
            &["500g chicken leg quarters", "Vinegar", "Calamansi", "Annatto oil", "Lemongrass"],
            &[
                "school-age", "adolescent",
                "high-protein", "low-carb",
                "medium-cost",
                "chicken", "grilled", "non-vegetarian", "traditional",
            ],
            &["Meat"],
        ),
        dish(
            "Pork Giniling",
            "🍛",
            "Ground pork sautéed with potatoes, carrots, and raisins in tomato sauce.",
            &["400g ground pork", "Potatoes", "Carrots", "Tomato sauce", "Raisins"],
            &[
                "toddler", "preschool", "school-age",
                "high-protein", "iron-rich", "bite-sized", "kid-friendly",
                "low-cost",
                "pork", "fried", "non-vegetarian",
            ],
            &["Pork", "Meat"],
        ),
    ]
}
