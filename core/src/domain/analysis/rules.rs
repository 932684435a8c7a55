use crate::domain::analysis::entities::{
    CanonicalNutritionFacts, ConsumptionVerdict, Diet, UserProfile,
};

/// Ingredient markers that rule out a vegan diet.
const NON_VEGAN: &[&str] = &[
    "milk", "cream", "butter", "cheese", "yogurt", "whey", "casein", "lactose", "egg", "honey",
    "gelatin", "gelatine", "lard", "tallow", "meat", "chicken", "beef", "pork", "fish",
    "anchovy", "shellfish", "shrimp",
];

/// Ingredient markers that rule out a vegetarian diet (animal flesh and
/// slaughter by-products; dairy and eggs are fine).
const NON_VEGETARIAN: &[&str] = &[
    "gelatin", "gelatine", "lard", "tallow", "rennet", "meat", "chicken", "beef", "pork",
    "fish", "anchovy", "shellfish", "shrimp",
];

/// Per-100g thresholds for condition-based rules.
const SODIUM_MG_LIMIT_HYPERTENSION: f64 = 600.0;
const SUGARS_G_LIMIT_DIABETES: f64 = 22.5;
const SATURATED_FAT_G_LIMIT_HEART: f64 = 5.0;

/// Evaluates the profile rules in fixed priority order.
///
/// The first category that produces a `No` wins and evaluation stops across
/// categories, but every matching reason inside the winning category is
/// collected. Ingredients and profile strings are already normalized
/// (lower-cased, trimmed) by the entities that carry them.
pub fn evaluate(
    ingredients: &[String],
    profile: &UserProfile,
    facts: &CanonicalNutritionFacts,
) -> ConsumptionVerdict {
    let allergy_reasons = allergy_matches(ingredients, profile);
    if !allergy_reasons.is_empty() {
        return ConsumptionVerdict::no(allergy_reasons);
    }

    let diet_reasons = diet_violations(ingredients, &profile.diet);
    if !diet_reasons.is_empty() {
        return ConsumptionVerdict::no(diet_reasons);
    }

    let condition_reasons = condition_violations(profile, facts);
    if !condition_reasons.is_empty() {
        return ConsumptionVerdict::no(condition_reasons);
    }

    ConsumptionVerdict::yes()
}

fn allergy_matches(ingredients: &[String], profile: &UserProfile) -> Vec<String> {
    let mut reasons = Vec::new();
    for allergy in &profile.allergies {
        for ingredient in ingredients {
            if ingredient.contains(allergy.as_str()) {
                reasons.push(format!(
                    "contains allergen \"{allergy}\" (ingredient: {ingredient})"
                ));
            }
        }
    }
    reasons
}

fn diet_violations(ingredients: &[String], diet: &Diet) -> Vec<String> {
    let (markers, label) = match diet {
        Diet::Vegan => (NON_VEGAN, "vegan"),
        Diet::Vegetarian => (NON_VEGETARIAN, "vegetarian"),
        Diet::None | Diet::Other(_) => return Vec::new(),
    };

    let mut reasons = Vec::new();
    for ingredient in ingredients {
        if let Some(marker) = markers.iter().find(|m| ingredient.contains(*m)) {
            reasons.push(format!(
                "not {label}: ingredient \"{ingredient}\" contains {marker}"
            ));
        }
    }
    reasons
}

fn condition_violations(profile: &UserProfile, facts: &CanonicalNutritionFacts) -> Vec<String> {
    let mut reasons = Vec::new();
    for condition in &profile.conditions {
        if condition.contains("blood pressure") || condition.contains("hypertension") {
            if let Some(sodium) = facts.sodium_mg {
                if sodium > SODIUM_MG_LIMIT_HYPERTENSION {
                    reasons.push(format!(
                        "high sodium ({sodium:.0} mg/100g) unsuitable for {condition}"
                    ));
                }
            }
        }
        if condition.contains("diabetes") {
            if let Some(sugars) = facts.sugars_g {
                if sugars > SUGARS_G_LIMIT_DIABETES {
                    reasons.push(format!(
                        "high sugar ({sugars:.1} g/100g) unsuitable for {condition}"
                    ));
                }
            }
        }
        if condition.contains("heart") || condition.contains("cholesterol") {
            if let Some(sat_fat) = facts.saturated_fat_g {
                if sat_fat > SATURATED_FAT_G_LIMIT_HEART {
                    reasons.push(format!(
                        "high saturated fat ({sat_fat:.1} g/100g) unsuitable for {condition}"
                    ));
                }
            }
        }
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::Decision;

    fn ingredients(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn profile(allergies: &[&str], diet: Diet, conditions: &[&str]) -> UserProfile {
        UserProfile {
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
            diet,
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn milk_allergy_matches_milk_powder() {
        let verdict = evaluate(
            &ingredients(&["water", "milk powder", "sugar"]),
            &profile(&["milk"], Diet::None, &[]),
            &CanonicalNutritionFacts::default(),
        );
        assert_eq!(verdict.decision, Decision::No);
        assert_eq!(verdict.reasons.len(), 1);
        assert!(verdict.reasons[0].contains("milk"));
    }

    #[test]
    fn all_allergy_matches_are_collected() {
        let verdict = evaluate(
            &ingredients(&["milk powder", "skimmed milk", "peanut oil"]),
            &profile(&["milk", "peanut"], Diet::None, &[]),
            &CanonicalNutritionFacts::default(),
        );
        assert_eq!(verdict.decision, Decision::No);
        assert_eq!(verdict.reasons.len(), 3);
    }

    #[test]
    fn allergy_category_short_circuits_diet_category() {
        // gelatin would also violate the vegan diet, but only allergy reasons
        // may appear once the allergy category decided
        let verdict = evaluate(
            &ingredients(&["milk powder", "gelatin"]),
            &profile(&["milk"], Diet::Vegan, &[]),
            &CanonicalNutritionFacts::default(),
        );
        assert_eq!(verdict.decision, Decision::No);
        assert!(verdict.reasons.iter().all(|r| r.contains("allergen")));
    }

    #[test]
    fn vegan_diet_rejects_gelatin() {
        let verdict = evaluate(
            &ingredients(&["sugar", "gelatin", "citric acid"]),
            &profile(&[], Diet::Vegan, &[]),
            &CanonicalNutritionFacts::default(),
        );
        assert_eq!(verdict.decision, Decision::No);
        assert!(verdict.reasons[0].contains("vegan"));
    }

    #[test]
    fn vegetarian_diet_allows_dairy() {
        let verdict = evaluate(
            &ingredients(&["milk", "cream"]),
            &profile(&[], Diet::Vegetarian, &[]),
            &CanonicalNutritionFacts::default(),
        );
        assert_eq!(verdict.decision, Decision::Yes);
    }

    #[test]
    fn hypertension_blocks_high_sodium() {
        let facts = CanonicalNutritionFacts {
            sodium_mg: Some(750.0),
            ..Default::default()
        };
        let verdict = evaluate(
            &ingredients(&["salt", "water"]),
            &profile(&[], Diet::None, &["high blood pressure"]),
            &facts,
        );
        assert_eq!(verdict.decision, Decision::No);
        assert!(verdict.reasons[0].contains("sodium"));
    }

    #[test]
    fn hypertension_allows_moderate_sodium() {
        let facts = CanonicalNutritionFacts {
            sodium_mg: Some(300.0),
            ..Default::default()
        };
        let verdict = evaluate(
            &ingredients(&["water"]),
            &profile(&[], Diet::None, &["hypertension"]),
            &facts,
        );
        assert_eq!(verdict.decision, Decision::Yes);
    }

    #[test]
    fn unknown_sodium_never_fires_condition_rule() {
        let verdict = evaluate(
            &ingredients(&["salt"]),
            &profile(&[], Diet::None, &["high blood pressure"]),
            &CanonicalNutritionFacts::default(),
        );
        assert_eq!(verdict.decision, Decision::Yes);
    }

    #[test]
    fn empty_profile_never_says_no() {
        let verdict = evaluate(
            &ingredients(&["milk", "gelatin", "beef"]),
            &UserProfile::default(),
            &CanonicalNutritionFacts {
                sodium_mg: Some(2000.0),
                sugars_g: Some(80.0),
                ..Default::default()
            },
        );
        assert_eq!(verdict.decision, Decision::Yes);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn empty_ingredients_with_empty_profile_is_yes_not_failure() {
        let verdict = evaluate(&[], &UserProfile::default(), &CanonicalNutritionFacts::default());
        assert_eq!(verdict.decision, Decision::Yes);
        assert!(verdict.reasons.is_empty());
    }
}
