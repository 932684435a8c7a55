use utoipa::OpenApi;

use nutrisense_core::domain::analysis::entities::{
    CanonicalNutritionFacts, Decision, Diet, ExtractedData, Grade,
    NutriScoreResult, ProductAnalysis, SourceProvenance, UserProfile,
};

use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    chat::{handlers::send_message::ChatResponse, router::ChatApiDoc, validators::ChatRequest},
    server::api_entities::api_error::ErrorBody,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutrisense API",
        description = "Food product analysis and nutrition chat service"
    ),
    components(schemas(
        ProductAnalysis,
        ExtractedData,
        CanonicalNutritionFacts,
        NutriScoreResult,
        Grade,
        Decision,
        UserProfile,
        Diet,
        SourceProvenance,
        ChatRequest,
        ChatResponse,
        ErrorBody,
    )),
    tags(
        (name = "analysis", description = "Product analysis endpoints"),
        (name = "chat", description = "Nutrition chat endpoints")
    )
)]
pub struct ApiDoc;

/// Merged OpenAPI document with every path rebased onto the root path.
pub fn build_openapi(root_path: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(AnalysisApiDoc::openapi());
    openapi.merge(ChatApiDoc::openapi());

    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    openapi
}
