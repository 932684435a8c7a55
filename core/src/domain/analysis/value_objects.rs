use crate::domain::analysis::entities::UserProfile;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeProductInput {
    pub barcode: Option<String>,
    pub image_data: Option<Vec<u8>>,
    pub profile: UserProfile,
}
