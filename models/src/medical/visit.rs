// models/src/medical/visit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::PatientKey;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd10_quickest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_icd10_list: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<String>,
}

/// One visit document, foreign-keyed to its patient. `created_at` is
/// the ordering key when no appointment date governs display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub patient_id: PatientKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_complaints: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Diagnosis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(default)]
    pub medication_history: Vec<MedicationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investigation_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investigation_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitals: Option<Vitals>,
}

impl VisitRecord {
    /// A visit for the given patient with no clinical content.
    pub fn new(patient_id: PatientKey) -> Self {
        Self {
            id: None,
            patient_id,
            appointment_date: None,
            created_at: None,
            visit_type: None,
            seen_by: None,
            chief_complaints: None,
            diagnosis: None,
            treatment: None,
            medication_history: Vec::new(),
            investigation_request: None,
            investigation_result: None,
            notes: None,
            vitals: None,
        }
    }
}
