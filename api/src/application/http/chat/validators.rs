use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use nutrisense_core::domain::analysis::entities::UserProfile;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "message must be between 1 and 5000 characters"
    ))]
    pub message: String,

    pub profile: Option<UserProfile>,
}
