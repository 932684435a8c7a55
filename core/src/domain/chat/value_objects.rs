use crate::domain::analysis::entities::UserProfile;

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub message: String,
    pub profile: UserProfile,
}
