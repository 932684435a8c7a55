use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::analysis::entities::{
    nutrition::CanonicalNutritionFacts, product::SourceProvenance, profile::UserProfile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

/// Deterministic function of the canonical facts only; no profile dependence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutriScoreResult {
    pub score: i32,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Decision {
    Yes,
    No,
}

/// Rule-evaluator output: the decision plus every reason collected from the
/// winning rule category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConsumptionVerdict {
    pub decision: Decision,
    pub reasons: Vec<String>,
}

impl ConsumptionVerdict {
    pub fn yes() -> Self {
        Self {
            decision: Decision::Yes,
            reasons: Vec::new(),
        }
    }

    pub fn no(reasons: Vec<String>) -> Self {
        Self {
            decision: Decision::No,
            reasons,
        }
    }
}

/// Normalized ingredient/nutrition data as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedData {
    pub ingredients: Vec<String>,
    pub nutrition_facts: CanonicalNutritionFacts,
}

/// Full per-request analysis payload. Built fresh for every request and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductAnalysis {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: ExtractedData,
    pub nutriscore: NutriScoreResult,
    pub profile: UserProfile,
    pub should_consume: Decision,
    pub reasons: Vec<String>,
    pub source: SourceProvenance,
}
