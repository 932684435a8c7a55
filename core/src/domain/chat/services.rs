use crate::domain::{
    analysis::{
        entities::UserProfile,
        ports::{BarcodeLookup, ConsumptionClassifier, FallbackCatalog, NutritionExtractor},
    },
    chat::{
        ports::{ChatModel, ChatService},
        value_objects::ChatInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<B, X, F, CL, CH> ChatService for Service<B, X, F, CL, CH>
where
    B: BarcodeLookup,
    X: NutritionExtractor,
    F: FallbackCatalog,
    CL: ConsumptionClassifier,
    CH: ChatModel,
{
    async fn send_message(&self, input: ChatInput) -> Result<String, CoreError> {
        let context = render_profile_context(&input.profile);
        self.chat_model.answer(input.message, context).await
    }
}

/// Renders the profile into a short plain-text context block for the model.
fn render_profile_context(profile: &UserProfile) -> String {
    let allergies = if profile.allergies.is_empty() {
        "none".to_string()
    } else {
        profile.allergies.join(", ")
    };
    let conditions = if profile.conditions.is_empty() {
        "none".to_string()
    } else {
        profile.conditions.join(", ")
    };
    let diet: String = profile.diet.clone().into();

    format!(
        "User health profile:\n- allergies: {allergies}\n- diet: {diet}\n- conditions: {conditions}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::Diet;

    #[test]
    fn empty_profile_renders_none_everywhere() {
        let context = render_profile_context(&UserProfile::default());
        assert!(context.contains("allergies: none"));
        assert!(context.contains("diet: none"));
        assert!(context.contains("conditions: none"));
    }

    #[test]
    fn populated_profile_lists_entries() {
        let context = render_profile_context(&UserProfile {
            allergies: vec!["milk".to_string(), "peanut".to_string()],
            diet: Diet::Vegan,
            conditions: vec!["diabetes".to_string()],
        });
        assert!(context.contains("milk, peanut"));
        assert!(context.contains("diet: vegan"));
        assert!(context.contains("diabetes"));
    }
}
