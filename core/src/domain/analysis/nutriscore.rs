use crate::domain::analysis::entities::{CanonicalNutritionFacts, Grade, NutriScoreResult};

/// 2017 Nutri-Score band thresholds for general foods, per 100g.
/// Points are the count of thresholds the value exceeds.
const ENERGY_KJ_BANDS: [f64; 10] = [
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
];
const SUGARS_G_BANDS: [f64; 10] = [4.5, 9.0, 13.5, 18.0, 22.5, 27.0, 31.0, 36.0, 40.0, 45.0];
const SATURATED_FAT_G_BANDS: [f64; 10] =
    [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
const SODIUM_MG_BANDS: [f64; 10] = [
    90.0, 180.0, 270.0, 360.0, 450.0, 540.0, 630.0, 720.0, 810.0, 900.0,
];
const FIBER_G_BANDS: [f64; 5] = [0.9, 1.9, 2.8, 3.7, 4.7];
const PROTEIN_G_BANDS: [f64; 5] = [1.6, 3.2, 4.8, 6.4, 8.0];

const KJ_PER_KCAL: f64 = 4.184;

/// Computes the Nutri-Score from canonical per-100g facts.
///
/// Pure and deterministic. Missing nutrients score zero points — the most
/// favorable band — so the engine always returns a result rather than failing
/// on sparse data.
pub fn compute(facts: &CanonicalNutritionFacts) -> NutriScoreResult {
    let energy_kj = facts.energy_kcal.map(|kcal| kcal * KJ_PER_KCAL);

    let energy_points = band_points(energy_kj, &ENERGY_KJ_BANDS);
    let sugars_points = band_points(facts.sugars_g, &SUGARS_G_BANDS);
    let saturated_fat_points = band_points(facts.saturated_fat_g, &SATURATED_FAT_G_BANDS);
    let sodium_points = band_points(facts.sodium_mg, &SODIUM_MG_BANDS);
    let negative = energy_points + sugars_points + saturated_fat_points + sodium_points;

    let fruit_veg_points = fruit_veg_points(facts.fruit_veg_percent);
    let fiber_points = band_points(facts.fiber_g, &FIBER_G_BANDS);
    let protein_points = band_points(facts.protein_g, &PROTEIN_G_BANDS);

    // Protein only counts when negative points stay under 11 or the product
    // is mostly fruit/vegetable (the published exception).
    let positive = if negative >= 11 && fruit_veg_points < 5 {
        fruit_veg_points + fiber_points
    } else {
        fruit_veg_points + fiber_points + protein_points
    };

    let score = negative - positive;
    NutriScoreResult {
        score,
        grade: grade_for(score),
    }
}

fn band_points(value: Option<f64>, bands: &[f64]) -> i32 {
    match value {
        Some(v) => bands.iter().filter(|&&threshold| v > threshold).count() as i32,
        None => 0,
    }
}

fn fruit_veg_points(percent: Option<f64>) -> i32 {
    match percent {
        Some(p) if p > 80.0 => 5,
        Some(p) if p > 60.0 => 2,
        Some(p) if p > 40.0 => 1,
        _ => 0,
    }
}

fn grade_for(score: i32) -> Grade {
    match score {
        i32::MIN..=-1 => Grade::A,
        0..=2 => Grade::B,
        3..=10 => Grade::C,
        11..=18 => Grade::D,
        _ => Grade::E,
    }
}
