// portal/src/sections.rs
//
// Section formatters: pure, total mappings from one patient document to
// the client-facing view shapes. Formatters are only invoked after a
// record has been located; a missing sub-document yields an empty or
// null-filled shape, never an error. Field spellings are part of the
// wire contract and must not change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::{Address, Allergy, ContactInfo, GeneticCondition, InsuranceInfo, PatientRecord, PersonName};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicsView {
    #[serde(rename = "patientId")]
    pub patient_id: String,
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
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub id: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceView {
    pub patient_id: String,
    #[serde(default)]
    pub insurance: InsuranceInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deceased: Option<bool>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub genetic_conditions: Vec<GeneticCondition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticConditionView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_results: Option<String>,
    pub family_member_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyHistoryView {
    #[serde(default)]
    pub family_members: Vec<FamilyMemberView>,
    #[serde(default)]
    pub genetic_conditions: Vec<GeneticConditionView>,
}

/// The social-history aggregate: all 13 sections under their client
/// keys, each explicitly null when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialHistoryView {
    pub tobacco_smoking: Option<Value>,
    pub tobacco_consumption: Option<Value>,
    pub alcohol: Option<Value>,
    pub social_text: Option<Value>,
    pub financial: Option<Value>,
    pub education: Option<Value>,
    pub physical_activity: Option<Value>,
    pub stress: Option<Value>,
    pub social_isolation: Option<Value>,
    pub exposure_to_violence: Option<Value>,
    pub gender_identity: Option<Value>,
    pub sexual_orientation: Option<Value>,
    pub nutrients: Option<Value>,
}

pub fn demographics(patient: &PatientRecord) -> DemographicsView {
    DemographicsView {
        patient_id: patient.id.to_string(),
        name: patient.name.clone(),
        date_of_birth: patient.date_of_birth.clone(),
        gender: patient.gender.clone(),
        blood_group: patient.blood_group.clone(),
        occupation: patient.occupation.clone(),
        aadhaar: patient.aadhaar.clone(),
        pan: patient.pan.clone(),
        address: patient.address.clone().unwrap_or_default(),
    }
}

pub fn contact(patient: &PatientRecord) -> ContactView {
    ContactView {
        id: patient.id.to_string(),
        contact_info: patient.contact_info.clone().unwrap_or_default(),
    }
}

pub fn insurance(patient: &PatientRecord) -> InsuranceView {
    InsuranceView {
        patient_id: patient.id.to_string(),
        insurance: patient.insurance.clone().unwrap_or_default(),
    }
}

pub fn allergies(patient: &PatientRecord) -> Vec<Allergy> {
    patient.allergies.clone()
}

/// Family history with the derived flattened genetic-conditions list:
/// every member's genetic conditions, each enriched with the member's
/// first+last display name. One-to-many; a member with three conditions
/// contributes three entries.
pub fn family_history(patient: &PatientRecord) -> FamilyHistoryView {
    let members = patient
        .family_history
        .as_ref()
        .map(|history| history.family_members.as_slice())
        .unwrap_or_default();

    let family_members: Vec<FamilyMemberView> = members
        .iter()
        .map(|member| FamilyMemberView {
            first_name: member.name.first.clone(),
            middle_name: member.name.middle.clone(),
            last_name: member.name.last.clone(),
            dob: member.date_of_birth.clone(),
            gender: member.gender.clone(),
            relationship: member.relationship.clone(),
            deceased: member.deceased,
            medical_conditions: member.medical_conditions.clone(),
            genetic_conditions: member.genetic_conditions.clone(),
        })
        .collect();

    let genetic_conditions: Vec<GeneticConditionView> = members
        .iter()
        .flat_map(|member| {
            let member_name = member.name.first_last();
            member
                .genetic_conditions
                .iter()
                .map(move |condition| GeneticConditionView {
                    condition_name: condition.condition_name.clone(),
                    affected_member: condition.affected_family_member.clone(),
                    test_results: condition.genetic_testing_results.clone(),
                    family_member_name: member_name.clone(),
                })
        })
        .collect();

    FamilyHistoryView {
        family_members,
        genetic_conditions,
    }
}

pub fn social_history(patient: &PatientRecord) -> SocialHistoryView {
    let social = patient.social_history.clone().unwrap_or_default();
    SocialHistoryView {
        tobacco_smoking: social.tobacco_smoking,
        tobacco_consumption: social.tobacco_consumption,
        alcohol: social.alcohol_use,
        social_text: social.social_history_free_text,
        financial: social.financial_resources,
        education: social.education,
        physical_activity: social.physical_activity,
        stress: social.stress,
        social_isolation: social.social_isolation_connection,
        exposure_to_violence: social.exposure_to_violence,
        gender_identity: social.gender_identity,
        sexual_orientation: social.sexual_orientation,
        nutrients: social.nutrients_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{PatientKey, PatientRecord};
    use serde_json::json;

    fn bare_patient() -> PatientRecord {
        PatientRecord::new(PatientKey::new("65f1c0ffee00000000000001").unwrap())
    }

    #[test]
    fn formatters_are_total_over_an_empty_document() {
        let patient = bare_patient();

        let demo = demographics(&patient);
        assert_eq!(demo.patient_id, "65f1c0ffee00000000000001");
        assert_eq!(serde_json::to_value(&demo.address).unwrap(), json!({}));

        assert_eq!(
            serde_json::to_value(contact(&patient).contact_info).unwrap(),
            json!({})
        );
        assert_eq!(
            serde_json::to_value(insurance(&patient).insurance).unwrap(),
            json!({})
        );
        assert!(allergies(&patient).is_empty());

        let family = family_history(&patient);
        assert!(family.family_members.is_empty());
        assert!(family.genetic_conditions.is_empty());
    }

    #[test]
    fn social_history_defaults_every_section_to_null() {
        let view = social_history(&bare_patient());
        let value = serde_json::to_value(view).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 13);
        assert!(object.values().all(|section| section.is_null()));
        assert!(object.contains_key("tobaccoSmoking"));
        assert!(object.contains_key("nutrients"));
    }

    #[test]
    fn social_history_sections_default_independently() {
        let mut patient = bare_patient();
        patient.social_history = serde_json::from_value(json!({
            "alcohol_use": { "status": "occasional" }
        }))
        .unwrap();

        let view = social_history(&patient);
        assert_eq!(view.alcohol, Some(json!({ "status": "occasional" })));
        assert!(view.stress.is_none());
        assert!(view.tobacco_smoking.is_none());
    }

    #[test]
    fn genetic_conditions_flatten_one_entry_per_member_condition() {
        let mut patient = bare_patient();
        patient.family_history = serde_json::from_value(json!({
            "family_members": [
                {
                    "name": { "first": "Asha", "last": "Rao" },
                    "relationship": "Mother",
                    "genetic_conditions": [
                        { "condition_name": "BRCA1", "genetic_testing_results": "Positive" },
                        { "condition_name": "Thalassemia" }
                    ]
                },
                { "name": { "first": "Ravi" }, "relationship": "Uncle" },
                {
                    "genetic_conditions": [
                        { "condition_name": "G6PD" }
                    ]
                }
            ]
        }))
        .unwrap();

        let view = family_history(&patient);
        let member_condition_total: usize = patient
            .family_history
            .as_ref()
            .unwrap()
            .family_members
            .iter()
            .map(|m| m.genetic_conditions.len())
            .sum();
        assert_eq!(view.genetic_conditions.len(), member_condition_total);
        assert_eq!(view.genetic_conditions[0].family_member_name, "Asha Rao");
        assert_eq!(view.genetic_conditions[1].family_member_name, "Asha Rao");
        // Both name parts absent joins to the empty string.
        assert_eq!(view.genetic_conditions[2].family_member_name, "");
    }

    #[test]
    fn family_member_view_uses_camel_case_wire_names() {
        let mut patient = bare_patient();
        patient.family_history = serde_json::from_value(json!({
            "family_members": [
                {
                    "name": { "first": "Asha" },
                    "date_of_birth": "1960-01-01",
                    "medical_conditions": ["Hypertension"]
                }
            ]
        }))
        .unwrap();

        let value = serde_json::to_value(family_history(&patient)).unwrap();
        let member = &value["familyMembers"][0];
        assert_eq!(member["firstName"], "Asha");
        assert_eq!(member["dob"], "1960-01-01");
        assert_eq!(member["medicalConditions"][0], "Hypertension");
    }
}
