use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::{
        entities::RawProductData, ports::NutritionExtractor, schema::get_extraction_schema,
    },
    chat::ports::ChatModel,
    common::entities::app_errors::CoreError,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const EXTRACTION_PROMPT: &str = "You are an assistant that extracts structured food product data \
from packaging images.\n\nExtract:\n1. The list of ingredients, in label order.\n2. Nutrition \
facts per 100g where stated (key: value, with units).\n\nReturn JSON with `ingredients` (array \
of strings) and `nutrition_facts` (object of label to value string).";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

/// Shape of the structured extraction reply, enforced by the response schema.
#[derive(Debug, Deserialize)]
struct ExtractionReply {
    ingredients: Vec<String>,
    #[serde(default)]
    nutrition_facts: serde_json::Map<String, serde_json::Value>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String) -> Result<Self, anyhow::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            api_key,
            model_name,
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl NutritionExtractor for GeminiLLMClient {
    async fn extract(&self, image_data: Vec<u8>) -> Result<RawProductData, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: EXTRACTION_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: get_extraction_schema(),
            }),
        };

        let raw = self.call_gemini_api(request).await?;

        let reply: ExtractionReply = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Invalid extraction reply: {}", e);
            CoreError::ExternalServiceError(format!("Invalid extraction reply: {}", e))
        })?;

        Ok(RawProductData::new(reply.ingredients, reply.nutrition_facts))
    }
}

impl ChatModel for GeminiLLMClient {
    async fn answer(&self, message: String, profile_context: String) -> Result<String, CoreError> {
        let prompt = format!(
            "You are a nutrition assistant. Answer the user's question, taking their health \
profile into account.\n\n{profile_context}\n\nQuestion: {message}"
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: None,
        };

        self.call_gemini_api(request).await
    }
}
