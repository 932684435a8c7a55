use crate::domain::common::{NutrisenseConfig, services::Service};
use crate::infrastructure::{
    barcode::{LocalProductCatalog, OpenFoodFactsClient},
    classifier::LinearConsumptionModel,
    llm::GeminiLLMClient,
};

/// The concrete service used by the API binary.
pub type NutrisenseService = Service<
    OpenFoodFactsClient,
    GeminiLLMClient,
    LocalProductCatalog,
    LinearConsumptionModel,
    GeminiLLMClient,
>;

/// Constructs every collaborator once at startup and wires them into the
/// service. All of them are immutable afterwards and shared across requests.
pub fn create_service(config: NutrisenseConfig) -> Result<NutrisenseService, anyhow::Error> {
    let barcode_lookup = OpenFoodFactsClient::new(&config.barcode)?;
    let extractor = GeminiLLMClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
    )?;
    let chat_model = extractor.clone();
    let fallback_catalog = LocalProductCatalog::new();
    let classifier = LinearConsumptionModel::new();

    Ok(Service::new(
        barcode_lookup,
        extractor,
        fallback_catalog,
        classifier,
        chat_model,
    ))
}
