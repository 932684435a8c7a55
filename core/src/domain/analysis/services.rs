use crate::domain::{
    analysis::{
        aggregator::build_report,
        entities::ProductAnalysis,
        normalizer, nutriscore,
        ports::{
            AnalysisService, BarcodeLookup, ConsumptionClassifier, FallbackCatalog,
            NutritionExtractor,
        },
        resolver::resolve_source,
        rules,
        value_objects::AnalyzeProductInput,
    },
    chat::ports::ChatModel,
    common::{entities::app_errors::CoreError, services::Service},
};

impl<B, X, F, CL, CH> AnalysisService for Service<B, X, F, CL, CH>
where
    B: BarcodeLookup,
    X: NutritionExtractor,
    F: FallbackCatalog,
    CL: ConsumptionClassifier,
    CH: ChatModel,
{
    async fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> Result<ProductAnalysis, CoreError> {
        // 1. Pick exactly one upstream source
        let resolved = resolve_source(
            input.barcode.as_deref(),
            input.image_data.as_deref(),
            self.barcode_lookup.as_ref(),
            self.extractor.as_ref(),
            self.fallback_catalog.as_ref(),
        )
        .await?;

        tracing::debug!(source = ?resolved.provenance, "resolved product data source");

        // 2. Normalize nutrition data; degradations are warnings, not failures
        let normalized = normalizer::normalize(&resolved.data.nutrition_facts);
        for warning in &normalized.warnings {
            tracing::warn!(source = ?resolved.provenance, "{warning}");
        }

        // 3. Score, evaluate rules and classify over the same normalized record
        let nutriscore = nutriscore::compute(&normalized.facts);
        let verdict = rules::evaluate(&resolved.data.ingredients, &input.profile, &normalized.facts);
        let classifier_label = self.classifier.predict(&normalized.facts);

        // 4. Merge into the response payload
        Ok(build_report(
            resolved.data.ingredients,
            normalized.facts,
            nutriscore,
            verdict,
            classifier_label,
            input.profile,
            resolved.provenance,
        ))
    }
}
