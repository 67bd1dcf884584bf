// models/src/medical/family_history.rs

use serde::{Deserialize, Serialize};

use crate::medical::name::PersonName;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_family_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genetic_testing_results: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    #[serde(default)]
    pub name: PersonName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyHistory {
    #[serde(default)]
    pub family_members: Vec<FamilyMember>,
}
