use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    analysis::{
        entities::{BarcodeLookupOutcome, RawProductData},
        ports::BarcodeLookup,
    },
    common::{BarcodeConfig, entities::app_errors::CoreError},
};

/// Client for the Open Food Facts product API.
///
/// The timeout keeps the resolver's fallback step reachable in bounded time
/// when the service hangs.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    status: i32,
    product: Option<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    ingredients_text: String,
    #[serde(default)]
    nutriments: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Ingredient {
    text: String,
}

impl OpenFoodFactsClient {
    pub fn new(config: &BarcodeConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl BarcodeLookup for OpenFoodFactsClient {
    async fn lookup(&self, code: String) -> Result<BarcodeLookupOutcome, CoreError> {
        let url = format!("{}/api/v0/product/{}.json", self.base_url, code);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(barcode = %code, "barcode lookup request failed: {}", e);
            CoreError::ExternalServiceError(format!("barcode lookup error: {}", e))
        })?;

        // the API answers 404 for unknown codes on some deployments
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(BarcodeLookupOutcome::NotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(barcode = %code, "barcode lookup error status: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "barcode lookup returned {}",
                status
            )));
        }

        let body: ProductResponse = response.json().await.map_err(|e| {
            tracing::error!(barcode = %code, "invalid barcode lookup response: {}", e);
            CoreError::ExternalServiceError(format!("invalid barcode lookup response: {}", e))
        })?;

        let Some(product) = body.product.filter(|_| body.status == 1) else {
            return Ok(BarcodeLookupOutcome::NotFound);
        };

        Ok(BarcodeLookupOutcome::Found(into_raw_product(product)))
    }
}

fn into_raw_product(product: Product) -> RawProductData {
    let ingredients: Vec<String> = if product.ingredients.is_empty() {
        product
            .ingredients_text
            .split(',')
            .map(|i| i.to_string())
            .filter(|i| !i.trim().is_empty())
            .collect()
    } else {
        product.ingredients.into_iter().map(|i| i.text).collect()
    };

    // keep only per-100g values; the rest of the nutriments map is serving
    // sizes and unit annotations the normalizer has no use for
    let nutrition_facts = product
        .nutriments
        .into_iter()
        .filter(|(key, _)| key.ends_with("_100g"))
        .collect();

    RawProductData::new(ingredients, nutrition_facts)
}
