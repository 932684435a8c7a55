use crate::domain::analysis::entities::{
    CanonicalNutritionFacts, ConsumptionVerdict, Decision, ExtractedData, NutriScoreResult,
    ProductAnalysis, SourceProvenance, UserProfile,
};
use crate::domain::common::{generate_timestamp, generate_uuid_v7};

/// Merges the independent pipeline outputs into the response payload.
///
/// The rule verdict is authoritative: a rule-based `No` stands regardless of
/// the classifier. The classifier label only decides when the profile carries
/// no restrictions at all, replacing what would otherwise be a hardcoded Yes.
pub fn build_report(
    ingredients: Vec<String>,
    facts: CanonicalNutritionFacts,
    nutriscore: NutriScoreResult,
    verdict: ConsumptionVerdict,
    classifier_label: Decision,
    profile: UserProfile,
    source: SourceProvenance,
) -> ProductAnalysis {
    let (should_consume, reasons) = final_decision(verdict, &profile, classifier_label);
    let (analyzed_at, _) = generate_timestamp();

    ProductAnalysis {
        id: generate_uuid_v7(),
        analyzed_at,
        analysis: ExtractedData {
            ingredients,
            nutrition_facts: facts,
        },
        nutriscore,
        profile,
        should_consume,
        reasons,
        source,
    }
}

fn final_decision(
    verdict: ConsumptionVerdict,
    profile: &UserProfile,
    classifier_label: Decision,
) -> (Decision, Vec<String>) {
    if verdict.decision == Decision::No {
        return (Decision::No, verdict.reasons);
    }

    if !profile.has_restrictions() {
        let reasons = match classifier_label {
            Decision::Yes => Vec::new(),
            Decision::No => {
                vec!["nutrition model advises against regular consumption".to_string()]
            }
        };
        return (classifier_label, reasons);
    }

    (Decision::Yes, verdict.reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::Diet;

    fn restricted_profile() -> UserProfile {
        UserProfile {
            allergies: vec!["milk".to_string()],
            diet: Diet::None,
            conditions: vec![],
        }
    }

    #[test]
    fn rule_no_beats_classifier_yes() {
        let (decision, reasons) = final_decision(
            ConsumptionVerdict::no(vec!["contains allergen \"milk\"".to_string()]),
            &restricted_profile(),
            Decision::Yes,
        );
        assert_eq!(decision, Decision::No);
        assert_eq!(reasons.len(), 1);
    }

    #[test]
    fn restricted_profile_passing_rules_is_yes_regardless_of_classifier() {
        let (decision, _) = final_decision(
            ConsumptionVerdict::yes(),
            &restricted_profile(),
            Decision::No,
        );
        assert_eq!(decision, Decision::Yes);
    }

    #[test]
    fn unrestricted_profile_defers_to_classifier() {
        let (decision, reasons) =
            final_decision(ConsumptionVerdict::yes(), &UserProfile::default(), Decision::No);
        assert_eq!(decision, Decision::No);
        assert!(!reasons.is_empty());

        let (decision, reasons) =
            final_decision(ConsumptionVerdict::yes(), &UserProfile::default(), Decision::Yes);
        assert_eq!(decision, Decision::Yes);
        assert!(reasons.is_empty());
    }
}
