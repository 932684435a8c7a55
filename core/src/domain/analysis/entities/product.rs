use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ingredient and nutrition data as one upstream source produced it, before
/// normalization. Ingredient strings are lower-cased and trimmed but keep
/// label order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProductData {
    pub ingredients: Vec<String>,
    pub nutrition_facts: serde_json::Map<String, serde_json::Value>,
}

impl RawProductData {
    pub fn new(
        ingredients: Vec<String>,
        nutrition_facts: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        let ingredients = ingredients
            .into_iter()
            .map(|i| i.trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();
        Self {
            ingredients,
            nutrition_facts,
        }
    }
}

/// Which upstream source produced the data used in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SourceProvenance {
    Barcode,
    Gemini,
    Fallback,
}

/// Output of the barcode lookup port. Transport failures are `Err(CoreError)`
/// on the port itself; `NotFound` is a definitive answer, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum BarcodeLookupOutcome {
    Found(RawProductData),
    NotFound,
}

/// Exactly one of these exists per successfully resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSource {
    pub provenance: SourceProvenance,
    pub data: RawProductData,
}
