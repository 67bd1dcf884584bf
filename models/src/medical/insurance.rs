// models/src/medical/insurance.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<InsurancePlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<InsurancePlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_contact_number: Option<String>,
}
