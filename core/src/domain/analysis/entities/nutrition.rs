use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unit-consistent nutrient record on a per-100g/100ml basis.
///
/// `None` means the upstream source did not report the nutrient (or reported
/// something unparseable) — never a silent zero. All present values are
/// non-negative; the normalizer degrades negative inputs back to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CanonicalNutritionFacts {
    pub energy_kcal: Option<f64>,
    pub fat_g: Option<f64>,
    pub saturated_fat_g: Option<f64>,
    pub carbohydrates_g: Option<f64>,
    pub sugars_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub fruit_veg_percent: Option<f64>,
}

impl CanonicalNutritionFacts {
    /// True when no nutrient at all was recovered from the source.
    pub fn is_empty(&self) -> bool {
        self.energy_kcal.is_none()
            && self.fat_g.is_none()
            && self.saturated_fat_g.is_none()
            && self.carbohydrates_g.is_none()
            && self.sugars_g.is_none()
            && self.fiber_g.is_none()
            && self.protein_g.is_none()
            && self.sodium_mg.is_none()
            && self.fruit_veg_percent.is_none()
    }
}

/// Normalizer output: the canonical record plus non-fatal degradation notes
/// (dropped keys, parse failures). Warnings are logged, never surfaced as
/// request failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedNutrition {
    pub facts: CanonicalNutritionFacts,
    pub warnings: Vec<String>,
}
