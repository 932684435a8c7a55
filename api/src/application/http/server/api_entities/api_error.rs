use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use nutrisense_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("upstream service unavailable")]
    UpstreamUnavailable(String),

    #[error("internal server error")]
    InternalServerError,
}

/// Wire shape of every failure: `{error}` plus optional `{details}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NoSourceAvailable | CoreError::InvalidProfile(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::ExternalServiceError(details) => ApiError::UpstreamUnavailable(details),
            CoreError::InternalServerError => ApiError::InternalServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) | ApiError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details: None,
                },
            ),
            // generic message to the caller, detail kept for diagnostics only
            ApiError::UpstreamUnavailable(details) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    error: "upstream service unavailable".to_string(),
                    details: Some(details),
                },
            ),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "internal server error".to_string(),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs `validator` rules, rejecting with the
/// structured error envelope instead of axum's plain-text rejection.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
