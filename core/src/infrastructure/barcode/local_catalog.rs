use std::collections::HashMap;

use serde_json::json;

use crate::domain::analysis::{entities::RawProductData, ports::FallbackCatalog};

/// Embedded last-resort product table.
///
/// Holds a handful of widely scanned staples so the service can still answer
/// when both the barcode database and the vision model are unreachable. Built
/// once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct LocalProductCatalog {
    products: HashMap<String, RawProductData>,
}

impl LocalProductCatalog {
    pub fn new() -> Self {
        let mut products = HashMap::new();

        products.insert(
            // Nutella 750g
            "3017620422003".to_string(),
            entry(
                &["sugar", "palm oil", "hazelnuts", "skimmed milk powder", "cocoa", "lecithin", "vanillin"],
                json!({
                    "energy-kcal_100g": 539.0,
                    "fat_100g": 30.9,
                    "saturated-fat_100g": 10.6,
                    "sugars_100g": 56.3,
                    "fiber_100g": 0.0,
                    "proteins_100g": 6.3,
                    "sodium_100g": 0.0428
                }),
            ),
        );

        products.insert(
            // Coca-Cola 330ml
            "5449000000996".to_string(),
            entry(
                &["carbonated water", "sugar", "colour e150d", "phosphoric acid", "natural flavourings", "caffeine"],
                json!({
                    "energy-kcal_100g": 42.0,
                    "sugars_100g": 10.6,
                    "saturated-fat_100g": 0.0,
                    "sodium_100g": 0.0,
                    "proteins_100g": 0.0
                }),
            ),
        );

        products.insert(
            // Quaker rolled oats
            "8710398600461".to_string(),
            entry(
                &["wholegrain rolled oats"],
                json!({
                    "energy-kcal_100g": 372.0,
                    "fat_100g": 8.0,
                    "saturated-fat_100g": 1.5,
                    "sugars_100g": 1.1,
                    "fiber_100g": 9.0,
                    "proteins_100g": 11.0,
                    "sodium_100g": 0.0
                }),
            ),
        );

        Self { products }
    }
}

impl Default for LocalProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackCatalog for LocalProductCatalog {
    fn lookup(&self, code: &str) -> Option<RawProductData> {
        self.products.get(code.trim()).cloned()
    }
}

fn entry(ingredients: &[&str], nutriments: serde_json::Value) -> RawProductData {
    let nutrition_facts = match nutriments {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    RawProductData::new(
        ingredients.iter().map(|i| i.to_string()).collect(),
        nutrition_facts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_is_served() {
        let catalog = LocalProductCatalog::new();
        let data = catalog.lookup("3017620422003").unwrap();
        assert!(data.ingredients.contains(&"hazelnuts".to_string()));
        assert!(data.nutrition_facts.contains_key("sugars_100g"));
    }

    #[test]
    fn unknown_code_is_a_miss() {
        let catalog = LocalProductCatalog::new();
        assert!(catalog.lookup("0000000000000").is_none());
    }

    #[test]
    fn code_is_trimmed_before_lookup() {
        let catalog = LocalProductCatalog::new();
        assert!(catalog.lookup(" 5449000000996 ").is_some());
    }
}
