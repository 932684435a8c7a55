use axum::extract::{Multipart, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutrisense_core::domain::analysis::{
    entities::{ProductAnalysis, UserProfile},
    ports::AnalysisService,
    value_objects::AnalyzeProductInput,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze a food product",
    description = "Resolves product data from a barcode or a packaging image, scores it and \
checks it against the supplied health profile",
    responses(
        (status = 200, body = ProductAnalysis),
        (status = 400, description = "No usable source or invalid profile"),
        (status = 502, description = "Upstream collaborator failure")
    ),
)]
pub async fn analyze_product(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ProductAnalysis>, ApiError> {
    let mut barcode: Option<String> = None;
    let mut image_data: Option<Vec<u8>> = None;
    let mut profile = UserProfile::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "barcode" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read barcode: {}", e)))?;
                let value = value.trim().to_string();
                if !value.is_empty() {
                    barcode = Some(value);
                }
            }
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            "profile" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read profile: {}", e)))?;
                profile = UserProfile::from_json(&raw).map_err(ApiError::from)?;
            }
            _ => {}
        }
    }

    let analysis = state
        .service
        .analyze_product(AnalyzeProductInput {
            barcode,
            image_data,
            profile,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
