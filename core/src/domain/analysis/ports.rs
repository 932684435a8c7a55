use std::future::Future;

use crate::domain::{
    analysis::{
        entities::{
            BarcodeLookupOutcome, CanonicalNutritionFacts, Decision, ProductAnalysis,
            RawProductData,
        },
        value_objects::AnalyzeProductInput,
    },
    common::entities::app_errors::CoreError,
};

/// Remote barcode database lookup (Open Food Facts style).
///
/// `Ok(NotFound)` is a definitive miss; transport/timeout failures come back
/// as `Err` and the resolver treats them like a miss for fallback purposes.
#[cfg_attr(test, mockall::automock)]
pub trait BarcodeLookup: Send + Sync {
    fn lookup(
        &self,
        code: String,
    ) -> impl Future<Output = Result<BarcodeLookupOutcome, CoreError>> + Send;
}

/// Vision model extracting ingredients and nutrition facts from a label photo.
/// An empty ingredient list is valid output, not a failure.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionExtractor: Send + Sync {
    fn extract(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<RawProductData, CoreError>> + Send;
}

/// Embedded last-resort product table consulted when both remote sources are
/// unavailable. Local and synchronous.
#[cfg_attr(test, mockall::automock)]
pub trait FallbackCatalog: Send + Sync {
    fn lookup(&self, code: &str) -> Option<RawProductData>;
}

/// Auxiliary consumption-likelihood classifier. Pure and synchronous given
/// its trained weights; informational only, never overrides a rule-based No.
#[cfg_attr(test, mockall::automock)]
pub trait ConsumptionClassifier: Send + Sync {
    fn predict(&self, facts: &CanonicalNutritionFacts) -> Decision;
}

/// Service trait for the analysis pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<ProductAnalysis, CoreError>> + Send;
}
