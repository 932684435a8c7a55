use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use nutrisense_core::domain::chat::{ports::ChatService, value_objects::ChatInput};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Ask a nutrition question",
    description = "Forwards a free-text question to the conversational model, augmented with \
the user's health profile",
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, description = "Missing or invalid message"),
        (status = 502, description = "Conversational model failure")
    ),
    request_body = ChatRequest
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatResponse>, ApiError> {
    let profile = payload.profile.unwrap_or_default().normalized();

    let answer = state
        .service
        .send_message(ChatInput {
            message: payload.message,
            profile,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse { response: answer }))
}
