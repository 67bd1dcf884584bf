// portal/src/social.rs
//
// The section-to-field router for social history. External section keys
// are hyphenated; store field names are snake_case; the mapping is a
// fixed bijection. The reserved key "summary" is handled by the caller
// and deliberately has no entry here.

use serde_json::Value;

use models::SocialHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialSection {
    TobaccoSmoking,
    TobaccoConsumption,
    Alcohol,
    SocialText,
    FinancialResources,
    Education,
    PhysicalActivity,
    Stress,
    SocialIsolation,
    ExposureToViolence,
    GenderIdentity,
    SexualOrientation,
    NutrientsHistory,
}

impl SocialSection {
    pub const ALL: [SocialSection; 13] = [
        SocialSection::TobaccoSmoking,
        SocialSection::TobaccoConsumption,
        SocialSection::Alcohol,
        SocialSection::SocialText,
        SocialSection::FinancialResources,
        SocialSection::Education,
        SocialSection::PhysicalActivity,
        SocialSection::Stress,
        SocialSection::SocialIsolation,
        SocialSection::ExposureToViolence,
        SocialSection::GenderIdentity,
        SocialSection::SexualOrientation,
        SocialSection::NutrientsHistory,
    ];

    /// Resolves an externally-visible section key. Unknown keys are a
    /// client error, distinct from patient-not-found.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tobacco-smoking" => Some(SocialSection::TobaccoSmoking),
            "tobacco-consumption" => Some(SocialSection::TobaccoConsumption),
            "alcohol" => Some(SocialSection::Alcohol),
            "social-text" => Some(SocialSection::SocialText),
            "financial-resources" => Some(SocialSection::FinancialResources),
            "education" => Some(SocialSection::Education),
            "physical-activity" => Some(SocialSection::PhysicalActivity),
            "stress" => Some(SocialSection::Stress),
            "social-isolation" => Some(SocialSection::SocialIsolation),
            "exposure-to-violence" => Some(SocialSection::ExposureToViolence),
            "gender-identity" => Some(SocialSection::GenderIdentity),
            "sexual-orientation" => Some(SocialSection::SexualOrientation),
            "nutrients-history" => Some(SocialSection::NutrientsHistory),
            _ => None,
        }
    }

    /// The externally-visible hyphenated key.
    pub fn key(&self) -> &'static str {
        match self {
            SocialSection::TobaccoSmoking => "tobacco-smoking",
            SocialSection::TobaccoConsumption => "tobacco-consumption",
            SocialSection::Alcohol => "alcohol",
            SocialSection::SocialText => "social-text",
            SocialSection::FinancialResources => "financial-resources",
            SocialSection::Education => "education",
            SocialSection::PhysicalActivity => "physical-activity",
            SocialSection::Stress => "stress",
            SocialSection::SocialIsolation => "social-isolation",
            SocialSection::ExposureToViolence => "exposure-to-violence",
            SocialSection::GenderIdentity => "gender-identity",
            SocialSection::SexualOrientation => "sexual-orientation",
            SocialSection::NutrientsHistory => "nutrients-history",
        }
    }

    /// The raw-document field this section routes to.
    pub fn field_name(&self) -> &'static str {
        match self {
            SocialSection::TobaccoSmoking => "tobacco_smoking",
            SocialSection::TobaccoConsumption => "tobacco_consumption",
            SocialSection::Alcohol => "alcohol_use",
            SocialSection::SocialText => "social_history_free_text",
            SocialSection::FinancialResources => "financial_resources",
            SocialSection::Education => "education",
            SocialSection::PhysicalActivity => "physical_activity",
            SocialSection::Stress => "stress",
            SocialSection::SocialIsolation => "social_isolation_connection",
            SocialSection::ExposureToViolence => "exposure_to_violence",
            SocialSection::GenderIdentity => "gender_identity",
            SocialSection::SexualOrientation => "sexual_orientation",
            SocialSection::NutrientsHistory => "nutrients_history",
        }
    }

    /// Reads this section from the document, None when not recorded.
    pub fn value<'a>(&self, social: &'a SocialHistory) -> Option<&'a Value> {
        match self {
            SocialSection::TobaccoSmoking => social.tobacco_smoking.as_ref(),
            SocialSection::TobaccoConsumption => social.tobacco_consumption.as_ref(),
            SocialSection::Alcohol => social.alcohol_use.as_ref(),
            SocialSection::SocialText => social.social_history_free_text.as_ref(),
            SocialSection::FinancialResources => social.financial_resources.as_ref(),
            SocialSection::Education => social.education.as_ref(),
            SocialSection::PhysicalActivity => social.physical_activity.as_ref(),
            SocialSection::Stress => social.stress.as_ref(),
            SocialSection::SocialIsolation => social.social_isolation_connection.as_ref(),
            SocialSection::ExposureToViolence => social.exposure_to_violence.as_ref(),
            SocialSection::GenderIdentity => social.gender_identity.as_ref(),
            SocialSection::SexualOrientation => social.sexual_orientation.as_ref(),
            SocialSection::NutrientsHistory => social.nutrients_history.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SocialSection;
    use models::SocialHistory;
    use serde_json::json;

    #[test]
    fn every_section_key_round_trips() {
        for section in SocialSection::ALL {
            assert_eq!(SocialSection::from_key(section.key()), Some(section));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(SocialSection::from_key("not-a-real-section"), None);
        assert_eq!(SocialSection::from_key("summary"), None);
        assert_eq!(SocialSection::from_key(""), None);
        // Store field names are not valid external keys.
        assert_eq!(SocialSection::from_key("alcohol_use"), None);
    }

    #[test]
    fn key_to_field_mapping_is_bijective() {
        let mut fields: Vec<_> = SocialSection::ALL.iter().map(|s| s.field_name()).collect();
        fields.sort_unstable();
        fields.dedup();
        assert_eq!(fields.len(), SocialSection::ALL.len());
    }

    #[test]
    fn value_reads_the_routed_field() {
        let social: SocialHistory = serde_json::from_value(json!({
            "alcohol_use": { "status": "never" }
        }))
        .unwrap();
        assert_eq!(
            SocialSection::Alcohol.value(&social),
            Some(&json!({ "status": "never" }))
        );
        assert!(SocialSection::Stress.value(&social).is_none());
    }
}
