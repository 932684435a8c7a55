use serde_json::Value;

use crate::domain::analysis::entities::{CanonicalNutritionFacts, NormalizedNutrition};

/// kJ per kcal, for sources reporting energy in kilojoules.
const KJ_PER_KCAL: f64 = 4.184;

/// Sodium share of table salt by mass (NaCl is ~40% sodium).
const SODIUM_PER_SALT: f64 = 0.4;

/// Target slot in the canonical record for a recognized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nutrient {
    EnergyKcal,
    EnergyKj,
    Fat,
    SaturatedFat,
    Carbohydrates,
    Sugars,
    Fiber,
    Protein,
    SodiumG,
    Salt,
    FruitVegPercent,
}

/// Fixed mapping table from upstream spellings to canonical nutrients.
///
/// Covers both the barcode database's `*_100g` keys and the label strings the
/// vision model emits. Keys are matched after lower-casing, trimming and
/// stripping a `_100g` suffix.
fn recognize(key: &str) -> Option<Nutrient> {
    let canon = key.trim().to_lowercase();
    let canon = canon.strip_suffix("_100g").unwrap_or(&canon);
    match canon {
        "energy-kcal" | "calories" | "energy kcal" => Some(Nutrient::EnergyKcal),
        "energy-kj" | "energy" | "energy kj" => Some(Nutrient::EnergyKj),
        "fat" | "total fat" => Some(Nutrient::Fat),
        "saturated-fat" | "saturated fat" => Some(Nutrient::SaturatedFat),
        "carbohydrates" | "total carbohydrate" | "total carbohydrates" | "carbs" => {
            Some(Nutrient::Carbohydrates)
        }
        "sugars" | "sugar" | "total sugars" => Some(Nutrient::Sugars),
        "fiber" | "fibre" | "dietary fiber" | "dietary fibre" => Some(Nutrient::Fiber),
        "proteins" | "protein" => Some(Nutrient::Protein),
        "sodium" => Some(Nutrient::SodiumG),
        "salt" => Some(Nutrient::Salt),
        "fruits-vegetables-nuts"
        | "fruits-vegetables-nuts-estimate"
        | "fruits-vegetables-nuts-estimate-from-ingredients" => Some(Nutrient::FruitVegPercent),
        _ => None,
    }
}

/// Converts one upstream nutrition map into the canonical per-100g record.
///
/// Unrecognized keys and unparseable values degrade to warnings; a single bad
/// nutrient never fails the whole record.
pub fn normalize(raw: &serde_json::Map<String, Value>) -> NormalizedNutrition {
    let mut facts = CanonicalNutritionFacts::default();
    let mut warnings = Vec::new();

    for (key, value) in raw {
        let Some(nutrient) = recognize(key) else {
            warnings.push(format!("unrecognized nutrient key dropped: {key}"));
            continue;
        };

        let Some((amount, unit)) = parse_quantity(value) else {
            warnings.push(format!("unparseable value for {key}: {value}"));
            continue;
        };

        if amount < 0.0 {
            warnings.push(format!("negative value for {key} treated as unknown"));
            continue;
        }

        match convert(nutrient, amount, unit.as_deref()) {
            Some((slot, converted)) => assign(&mut facts, slot, converted, &mut warnings, key),
            None => warnings.push(format!(
                "unsupported unit {:?} for {key}",
                unit.unwrap_or_default()
            )),
        }
    }

    NormalizedNutrition { facts, warnings }
}

/// Parses a raw JSON value into a number plus an optional unit token.
/// Accepts plain numbers, and strings like `"12 g"`, `"150mg"`, `"250 kcal"`.
fn parse_quantity(value: &Value) -> Option<(f64, Option<String>)> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| (v, None)),
        Value::String(s) => {
            let s = s.trim().replace(',', ".");
            let split = s
                .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
                .unwrap_or(s.len());
            let (num, rest) = s.split_at(split);
            let amount: f64 = num.parse().ok()?;
            let unit = rest.trim().to_lowercase();
            Some((amount, (!unit.is_empty()).then_some(unit)))
        }
        _ => None,
    }
}

/// Maps (nutrient, amount, unit) onto a canonical slot and basis.
///
/// A missing unit means the source's native convention: the barcode database
/// reports grams (kcal for `energy-kcal`), which is also how bare numbers on
/// labels read for the gram-based nutrients.
fn convert(nutrient: Nutrient, amount: f64, unit: Option<&str>) -> Option<(Slot, f64)> {
    match nutrient {
        Nutrient::EnergyKcal => match unit {
            None | Some("kcal") | Some("cal") => Some((Slot::EnergyKcal, amount)),
            Some("kj") => Some((Slot::EnergyKcal, amount / KJ_PER_KCAL)),
            _ => None,
        },
        // bare "energy" keys are kilojoules unless the unit says otherwise
        Nutrient::EnergyKj => match unit {
            None | Some("kj") => Some((Slot::EnergyKcal, amount / KJ_PER_KCAL)),
            Some("kcal") | Some("cal") => Some((Slot::EnergyKcal, amount)),
            _ => None,
        },
        Nutrient::Fat => grams(Slot::Fat, amount, unit),
        Nutrient::SaturatedFat => grams(Slot::SaturatedFat, amount, unit),
        Nutrient::Carbohydrates => grams(Slot::Carbohydrates, amount, unit),
        Nutrient::Sugars => grams(Slot::Sugars, amount, unit),
        Nutrient::Fiber => grams(Slot::Fiber, amount, unit),
        Nutrient::Protein => grams(Slot::Protein, amount, unit),
        Nutrient::SodiumG => match unit {
            // the barcode database reports sodium in grams
            None | Some("g") => Some((Slot::SodiumMg, amount * 1000.0)),
            Some("mg") => Some((Slot::SodiumMg, amount)),
            _ => None,
        },
        Nutrient::Salt => match unit {
            None | Some("g") => Some((Slot::SodiumMg, amount * SODIUM_PER_SALT * 1000.0)),
            Some("mg") => Some((Slot::SodiumMg, amount * SODIUM_PER_SALT)),
            _ => None,
        },
        Nutrient::FruitVegPercent => match unit {
            None | Some("%") => Some((Slot::FruitVegPercent, amount)),
            _ => None,
        },
    }
}

fn grams(slot: Slot, amount: f64, unit: Option<&str>) -> Option<(Slot, f64)> {
    match unit {
        None | Some("g") => Some((slot, amount)),
        Some("mg") => Some((slot, amount / 1000.0)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    EnergyKcal,
    Fat,
    SaturatedFat,
    Carbohydrates,
    Sugars,
    Fiber,
    Protein,
    SodiumMg,
    FruitVegPercent,
}

fn assign(
    facts: &mut CanonicalNutritionFacts,
    slot: Slot,
    value: f64,
    warnings: &mut Vec<String>,
    key: &str,
) {
    let target = match slot {
        Slot::EnergyKcal => &mut facts.energy_kcal,
        Slot::Fat => &mut facts.fat_g,
        Slot::SaturatedFat => &mut facts.saturated_fat_g,
        Slot::Carbohydrates => &mut facts.carbohydrates_g,
        Slot::Sugars => &mut facts.sugars_g,
        Slot::Fiber => &mut facts.fiber_g,
        Slot::Protein => &mut facts.protein_g,
        Slot::SodiumMg => &mut facts.sodium_mg,
        Slot::FruitVegPercent => &mut facts.fruit_veg_percent,
    };
    // first recognized spelling wins; a second one is suspicious enough to note
    if target.is_some() {
        warnings.push(format!("duplicate nutrient {key} ignored"));
    } else {
        *target = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(pairs: &[(&str, Value)]) -> serde_json::Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn barcode_database_keys_normalize() {
        let raw = map(&[
            ("energy-kcal_100g", json!(250.0)),
            ("sugars_100g", json!(12.5)),
            ("saturated-fat_100g", json!(3.0)),
            ("sodium_100g", json!(0.15)),
            ("fiber_100g", json!(2.0)),
            ("proteins_100g", json!(6.0)),
        ]);
        let normalized = normalize(&raw);
        assert_eq!(normalized.facts.energy_kcal, Some(250.0));
        assert_eq!(normalized.facts.sugars_g, Some(12.5));
        assert_eq!(normalized.facts.saturated_fat_g, Some(3.0));
        assert_eq!(normalized.facts.sodium_mg, Some(150.0));
        assert_eq!(normalized.facts.fiber_g, Some(2.0));
        assert_eq!(normalized.facts.protein_g, Some(6.0));
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn label_strings_with_units_normalize() {
        let raw = map(&[
            ("Calories", json!("250 kcal")),
            ("Total Fat", json!("10 g")),
            ("Sodium", json!("150 mg")),
            ("Dietary Fiber", json!("2g")),
        ]);
        let normalized = normalize(&raw);
        assert_eq!(normalized.facts.energy_kcal, Some(250.0));
        assert_eq!(normalized.facts.fat_g, Some(10.0));
        assert_eq!(normalized.facts.sodium_mg, Some(150.0));
        assert_eq!(normalized.facts.fiber_g, Some(2.0));
    }

    #[test]
    fn energy_in_kilojoules_converts_to_kcal() {
        let raw = map(&[("energy_100g", json!(1046.0))]);
        let normalized = normalize(&raw);
        let kcal = normalized.facts.energy_kcal.unwrap();
        assert!((kcal - 250.0).abs() < 0.1);
    }

    #[test]
    fn salt_converts_to_sodium_milligrams() {
        let raw = map(&[("salt_100g", json!(1.0))]);
        let normalized = normalize(&raw);
        assert_eq!(normalized.facts.sodium_mg, Some(400.0));
    }

    #[test]
    fn unrecognized_key_is_dropped_with_warning_not_error() {
        let raw = map(&[
            ("vitamin-z_100g", json!(1.0)),
            ("sugars_100g", json!(5.0)),
        ]);
        let normalized = normalize(&raw);
        assert_eq!(normalized.facts.sugars_g, Some(5.0));
        assert_eq!(normalized.warnings.len(), 1);
        assert!(normalized.warnings[0].contains("vitamin-z_100g"));
    }

    #[test]
    fn unparseable_value_degrades_single_nutrient_only() {
        let raw = map(&[
            ("sugars_100g", json!("a lot")),
            ("proteins_100g", json!(6.0)),
        ]);
        let normalized = normalize(&raw);
        assert_eq!(normalized.facts.sugars_g, None);
        assert_eq!(normalized.facts.protein_g, Some(6.0));
        assert_eq!(normalized.warnings.len(), 1);
    }

    #[test]
    fn negative_value_degrades_to_unknown() {
        let raw = map(&[("sugars_100g", json!(-3.0))]);
        let normalized = normalize(&raw);
        assert_eq!(normalized.facts.sugars_g, None);
        assert!(!normalized.warnings.is_empty());
    }

    #[test]
    fn empty_map_yields_all_unknown() {
        let normalized = normalize(&serde_json::Map::new());
        assert!(normalized.facts.is_empty());
        assert!(normalized.warnings.is_empty());
    }
}
