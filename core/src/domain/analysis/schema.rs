use serde_json::json;

/// JSON response schema sent to the vision model so extraction output is
/// machine-parseable. Nutrition values stay strings ("12 g", "150 mg");
/// the normalizer owns unit parsing.
pub fn get_extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "nutrition_facts": {
                "type": "object",
                "properties": {
                    "Calories": { "type": "string" },
                    "Total Fat": { "type": "string" },
                    "Saturated Fat": { "type": "string" },
                    "Total Carbohydrate": { "type": "string" },
                    "Sugars": { "type": "string" },
                    "Dietary Fiber": { "type": "string" },
                    "Protein": { "type": "string" },
                    "Sodium": { "type": "string" }
                }
            }
        },
        "required": ["ingredients", "nutrition_facts"]
    })
}
