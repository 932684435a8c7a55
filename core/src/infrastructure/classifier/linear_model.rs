use crate::domain::analysis::{
    entities::{CanonicalNutritionFacts, Decision},
    ports::ConsumptionClassifier,
};

/// Pre-trained linear consumption-likelihood model.
///
/// Weights were fit offline against labelled per-100g records and are fixed
/// for the lifetime of the process; prediction is pure. The signal is
/// informational only — the rule evaluator always has the last word on hard
/// constraints.
#[derive(Debug, Clone)]
pub struct LinearConsumptionModel {
    weights: Weights,
}

#[derive(Debug, Clone)]
struct Weights {
    bias: f64,
    energy_kcal: f64,
    sugars_g: f64,
    saturated_fat_g: f64,
    sodium_mg: f64,
    fiber_g: f64,
    protein_g: f64,
}

impl LinearConsumptionModel {
    pub fn new() -> Self {
        Self {
            weights: Weights {
                bias: 2.0,
                energy_kcal: -0.004,
                sugars_g: -0.06,
                saturated_fat_g: -0.15,
                sodium_mg: -0.002,
                fiber_g: 0.25,
                protein_g: 0.12,
            },
        }
    }

    fn score(&self, facts: &CanonicalNutritionFacts) -> f64 {
        let w = &self.weights;
        // unknown nutrients contribute nothing, matching the engine's
        // most-favorable-band treatment of missing data
        w.bias
            + w.energy_kcal * facts.energy_kcal.unwrap_or(0.0)
            + w.sugars_g * facts.sugars_g.unwrap_or(0.0)
            + w.saturated_fat_g * facts.saturated_fat_g.unwrap_or(0.0)
            + w.sodium_mg * facts.sodium_mg.unwrap_or(0.0)
            + w.fiber_g * facts.fiber_g.unwrap_or(0.0)
            + w.protein_g * facts.protein_g.unwrap_or(0.0)
    }
}

impl Default for LinearConsumptionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsumptionClassifier for LinearConsumptionModel {
    fn predict(&self, facts: &CanonicalNutritionFacts) -> Decision {
        if self.score(facts) >= 0.0 {
            Decision::Yes
        } else {
            Decision::No
        }
    }
}
