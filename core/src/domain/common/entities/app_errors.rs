use thiserror::Error;

/// Error taxonomy for the analysis core.
///
/// Client-caused failures (`NoSourceAvailable`, `InvalidProfile`) and upstream
/// failures (`ExternalServiceError`) are kept distinct so the HTTP layer can
/// map them to the right status without inspecting messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("no usable data source: provide a barcode or a product image")]
    NoSourceAvailable,

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("internal server error")]
    InternalServerError,
}
