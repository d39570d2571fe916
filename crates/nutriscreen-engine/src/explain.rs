//! Human-readable reasons a dish was recommended.

use nutriscreen_core::models::dish::Dish;
use nutriscreen_core::models::profile::AgeBracket;
use nutriscreen_core::models::risk::RiskScore;

/// Sentence fragments keyed by nutritional tag.
const TAG_SENTENCES: &[(&str, &str)] = &[
    ("high-protein", "High in protein for muscle development."),
    ("iron-rich", "Rich in iron for healthy blood."),
    ("calcium-rich", "Good source of calcium for strong bones."),
    ("omega-3", "Contains omega-3 fatty acids for brain health."),
    ("fiber-rich", "High in fiber for digestive health."),
    ("vitamin-a", "Rich in vitamin A for eye health."),
    ("vitamin-c", "Good source of vitamin C for immunity."),
    ("low-carb", "Low in carbohydrates for weight management."),
    ("low-cost", "Affordable and budget-friendly."),
];

/// Build the explanation string for one recommended dish.
pub fn explanation(dish: &Dish, risk: &RiskScore, bracket: AgeBracket) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for (tag, sentence) in TAG_SENTENCES {
        if dish.has_tag(tag) {
            parts.push(sentence);
        }
    }

    parts.push(if risk.score >= 70 {
        "Recommended for high malnutrition risk - provides essential nutrients."
    } else if risk.score >= 50 {
        "Good choice for moderate risk - balanced nutrition."
    } else {
        "Healthy option for maintaining good nutrition."
    });

    if dish.has_tag(bracket.dish_tag()) {
        if let Some(sentence) = bracket_sentence(bracket) {
            parts.push(sentence);
        }
    }

    parts.join(" ")
}

fn bracket_sentence(bracket: AgeBracket) -> Option<&'static str> {
    match bracket {
        AgeBracket::EarlyInfant => None,
        AgeBracket::Infant => Some("Perfect for infants - soft and easy to digest."),
        AgeBracket::EarlyToddler | AgeBracket::Toddler => {
            Some("Great for toddlers - soft texture and nutrient-dense.")
        }
        AgeBracket::Preschool => Some("Ideal for preschoolers - kid-friendly and nutritious."),
        AgeBracket::SchoolAge => {
            Some("Excellent for school-age children - energy-dense and healthy.")
        }
        AgeBracket::Adult => Some("Suited to adolescents and adults - full portions with balanced nutrition."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(tags: &[&str]) -> Dish {
        Dish {
            name: "Test".to_string(),
            icon: String::new(),
            description: String::new(),
            ingredients: Vec::new(),
            tags: tags.iter().map(|s| (*s).to_string()).collect(),
            allergens: Vec::new(),
        }
    }

    #[test]
    fn nutritional_tags_each_add_a_sentence() {
        let text = explanation(
            &dish(&["high-protein", "iron-rich"]),
            &RiskScore::from_score(0),
            AgeBracket::Adult,
        );
        assert!(text.contains("High in protein"));
        assert!(text.contains("Rich in iron"));
    }

    #[test]
    fn risk_band_changes_the_closing_sentence() {
        let severe = explanation(&dish(&[]), &RiskScore::from_score(86), AgeBracket::Adult);
        assert!(severe.contains("high malnutrition risk"));

        let low = explanation(&dish(&[]), &RiskScore::from_score(5), AgeBracket::Adult);
        assert!(low.contains("maintaining good nutrition"));
    }

    #[test]
    fn age_sentence_only_when_the_dish_carries_the_bracket_tag() {
        let tagged = explanation(
            &dish(&["toddler"]),
            &RiskScore::from_score(0),
            AgeBracket::Toddler,
        );
        assert!(tagged.contains("Great for toddlers"));

        let untagged = explanation(&dish(&[]), &RiskScore::from_score(0), AgeBracket::Toddler);
        assert!(!untagged.contains("toddlers"));
    }
}
