use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// User-supplied health constraints gating the consumption verdict.
///
/// Every field defaults when absent, so an empty JSON object (or no profile at
/// all) is a valid, unrestricted profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct UserProfile {
    pub allergies: Vec<String>,
    pub diet: Diet,
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
pub enum Diet {
    #[default]
    None,
    Vegan,
    Vegetarian,
    Other(String),
}

impl From<String> for Diet {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "none" => Diet::None,
            "vegan" => Diet::Vegan,
            "vegetarian" => Diet::Vegetarian,
            other => Diet::Other(other.to_string()),
        }
    }
}

impl From<Diet> for String {
    fn from(value: Diet) -> Self {
        match value {
            Diet::None => "none".to_string(),
            Diet::Vegan => "vegan".to_string(),
            Diet::Vegetarian => "vegetarian".to_string(),
            Diet::Other(s) => s,
        }
    }
}

impl UserProfile {
    /// Strict parse of the caller-supplied profile JSON.
    ///
    /// Malformed JSON is rejected with `InvalidProfile` rather than silently
    /// defaulted, so a typo in the payload never produces an unrestricted
    /// analysis the caller did not ask for.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let profile: UserProfile = serde_json::from_str(raw)
            .map_err(|e| CoreError::InvalidProfile(e.to_string()))?;
        Ok(profile.normalized())
    }

    /// Lower-cases and trims allergen and condition strings so downstream
    /// matching never has to re-normalize.
    pub fn normalized(mut self) -> Self {
        for allergy in &mut self.allergies {
            *allergy = allergy.trim().to_lowercase();
        }
        self.allergies.retain(|a| !a.is_empty());
        for condition in &mut self.conditions {
            *condition = condition.trim().to_lowercase();
        }
        self.conditions.retain(|c| !c.is_empty());
        self
    }

    /// True when at least one rule category could fire for this profile.
    pub fn has_restrictions(&self) -> bool {
        !self.allergies.is_empty() || self.diet != Diet::None || !self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let profile = UserProfile::from_json("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
        assert!(!profile.has_restrictions());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = UserProfile::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidProfile(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = UserProfile::from_json(r#"{"allergys":["milk"]}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidProfile(_)));
    }

    #[test]
    fn allergens_are_normalized() {
        let profile = UserProfile::from_json(r#"{"allergies":["  Milk ", "PEANUT"]}"#).unwrap();
        assert_eq!(profile.allergies, vec!["milk", "peanut"]);
        assert!(profile.has_restrictions());
    }

    #[test]
    fn diet_parses_known_and_unknown_values() {
        assert_eq!(Diet::from("Vegan".to_string()), Diet::Vegan);
        assert_eq!(Diet::from("".to_string()), Diet::None);
        assert_eq!(
            Diet::from("pescatarian".to_string()),
            Diet::Other("pescatarian".to_string())
        );
    }
}
