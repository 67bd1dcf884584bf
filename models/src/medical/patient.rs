// models/src/medical/patient.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::PatientKey;
use crate::medical::{
    Address, Allergy, ContactInfo, FamilyHistory, InsuranceInfo, PersonName, SocialHistory,
};

/// One patient document as held by the record store. Every section is
/// optional; partially-populated documents must always deserialize, so
/// the section formatters can stay total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: PatientKey,
    #[serde(default)]
    pub name: PersonName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<InsuranceInfo>,
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_history: Option<FamilyHistory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_history: Option<SocialHistory>,
}

impl PatientRecord {
    /// A record with the given key and every section absent.
    pub fn new(id: PatientKey) -> Self {
        Self {
            id,
            name: PersonName::default(),
            date_of_birth: None,
            gender: None,
            blood_group: None,
            occupation: None,
            aadhaar: None,
            pan: None,
            address: None,
            contact_info: None,
            insurance: None,
            allergies: Vec::new(),
            family_history: None,
            social_history: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PatientRecord;
    use serde_json::json;

    #[test]
    fn should_deserialize_minimal_document() {
        let record: PatientRecord =
            serde_json::from_value(json!({ "id": "65f1c0ffee00000000000001" })).unwrap();
        assert_eq!(record.id.as_str(), "65f1c0ffee00000000000001");
        assert!(record.name.first.is_none());
        assert!(record.allergies.is_empty());
        assert!(record.social_history.is_none());
    }

    #[test]
    fn should_deserialize_nested_sections() {
        let record: PatientRecord = serde_json::from_value(json!({
            "id": "65f1c0ffee00000000000001",
            "name": { "first": "Jane", "last": "Doe" },
            "allergies": [{ "allergen": "Penicillin", "reaction": "Rash" }],
            "social_history": { "alcohol_use": { "status": "never" } }
        }))
        .unwrap();
        assert_eq!(record.name.full(), "Jane Doe");
        assert_eq!(record.allergies.len(), 1);
        let social = record.social_history.unwrap();
        assert!(social.alcohol_use.is_some());
        assert!(social.stress.is_none());
    }
}
