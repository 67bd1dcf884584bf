// portal/src/aggregate.rs
//
// Aggregation shapes assembled from the section formatters. Everything
// here is a pure transformation over documents the caller has already
// fetched; fetch ordering (patient before visits) and the not-found
// short-circuit live with the caller.

use serde::{Deserialize, Serialize};

use models::{Allergy, PatientRecord, VisitRecord};

use crate::sections::{
    self, ContactView, DemographicsView, FamilyHistoryView, InsuranceView, SocialHistoryView,
};

/// The full profile: all six section formatters over one fetched
/// document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub demographics: DemographicsView,
    pub contact: ContactView,
    pub insurance: InsuranceView,
    pub allergies: Vec<Allergy>,
    #[serde(rename = "familyHistory")]
    pub family_history: FamilyHistoryView,
    #[serde(rename = "socialHistory")]
    pub social_history: SocialHistoryView,
}

pub fn profile_summary(patient: &PatientRecord) -> ProfileSummary {
    ProfileSummary {
        demographics: sections::demographics(patient),
        contact: sections::contact(patient),
        insurance: sections::insurance(patient),
        allergies: sections::allergies(patient),
        family_history: sections::family_history(patient),
        social_history: sections::social_history(patient),
    }
}

/// One visit reduced to the flat medical-records display row. The
/// allergy string is shared across all of a patient's rows; the index
/// is a zero-based back-reference into the descending visit sequence,
/// used by the vitals follow-up lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordRow {
    pub date: String,
    pub purpose: String,
    pub chief_complaints: String,
    pub conditions: String,
    pub medications: String,
    pub treatment: String,
    pub allergies: String,
    pub recent_assessments: String,
    pub visit_index: usize,
}

/// Flattens allergies to `"<allergen> (<reaction>)"` joined by `", "`,
/// or the literal `"None"` when the patient has no allergies.
pub fn allergy_summary(allergies: &[Allergy]) -> String {
    if allergies.is_empty() {
        return "None".to_string();
    }
    allergies
        .iter()
        .map(|allergy| {
            format!(
                "{} ({})",
                allergy.allergen.as_deref().unwrap_or_default(),
                allergy.reaction.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display date: the recorded appointment date, falling back to the
/// creation timestamp, empty when neither is present.
pub fn visit_display_date(visit: &VisitRecord) -> String {
    visit
        .appointment_date
        .clone()
        .or_else(|| {
            visit
                .created_at
                .map(|created| created.format("%-m/%-d/%Y").to_string())
        })
        .unwrap_or_default()
}

fn medication_summary(visit: &VisitRecord) -> String {
    if visit.medication_history.is_empty() {
        return "None".to_string();
    }
    visit
        .medication_history
        .iter()
        .map(|entry| {
            format!(
                "{} {}mg",
                entry.medicine.as_deref().unwrap_or_default(),
                entry.dosage.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn condition_summary(visit: &VisitRecord) -> String {
    visit
        .diagnosis
        .as_ref()
        .and_then(|diagnosis| {
            diagnosis
                .icd10_quickest
                .clone()
                .or_else(|| diagnosis.full_icd10_list.clone())
        })
        .unwrap_or_else(|| "None".to_string())
}

/// Reduces a descending visit sequence to medical-records rows. The
/// patient's allergies are flattened once and repeated on every row.
pub fn medical_record_rows(allergies: &[Allergy], visits: &[VisitRecord]) -> Vec<MedicalRecordRow> {
    let allergy_string = allergy_summary(allergies);
    visits
        .iter()
        .enumerate()
        .map(|(index, visit)| MedicalRecordRow {
            date: visit_display_date(visit),
            purpose: visit
                .visit_type
                .clone()
                .unwrap_or_else(|| "General Visit".to_string()),
            chief_complaints: visit
                .chief_complaints
                .clone()
                .unwrap_or_else(|| "Not recorded".to_string()),
            conditions: condition_summary(visit),
            medications: medication_summary(visit),
            treatment: visit
                .treatment
                .clone()
                .unwrap_or_else(|| "Not recorded".to_string()),
            allergies: allergy_string.clone(),
            recent_assessments: visit.notes.clone().unwrap_or_else(|| "No notes".to_string()),
            visit_index: index,
        })
        .collect()
}

/// The single most-recent visit reduced for the dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentVisit {
    pub date: String,
    pub doctor: String,
    pub purpose: String,
    pub visit_index: usize,
}

pub fn recent_visit(visits: &[VisitRecord]) -> Option<RecentVisit> {
    visits.first().map(|visit| RecentVisit {
        date: visit_display_date(visit),
        doctor: visit
            .seen_by
            .clone()
            .unwrap_or_else(|| "Unknown Doctor".to_string()),
        purpose: visit
            .visit_type
            .clone()
            .unwrap_or_else(|| "General Visit".to_string()),
        visit_index: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use models::{PatientKey, PatientRecord, VisitRecord};
    use serde_json::json;

    fn key() -> PatientKey {
        PatientKey::new("65f1c0ffee00000000000001").unwrap()
    }

    fn allergy(allergen: &str, reaction: &str) -> Allergy {
        Allergy {
            allergen: Some(allergen.to_string()),
            reaction: Some(reaction.to_string()),
            ..Allergy::default()
        }
    }

    #[test]
    fn allergy_summary_joins_or_defaults_to_none() {
        assert_eq!(allergy_summary(&[]), "None");
        let list = vec![allergy("Penicillin", "Rash"), allergy("Dust", "Sneezing")];
        assert_eq!(allergy_summary(&list), "Penicillin (Rash), Dust (Sneezing)");
    }

    #[test]
    fn profile_summary_covers_all_six_sections() {
        let summary = profile_summary(&PatientRecord::new(key()));
        let value = serde_json::to_value(&summary).unwrap();
        for section in [
            "demographics",
            "contact",
            "insurance",
            "allergies",
            "familyHistory",
            "socialHistory",
        ] {
            assert!(value.get(section).is_some(), "missing {section}");
        }
    }

    #[test]
    fn rows_prefer_quickest_diagnosis_and_index_visits() {
        let mut first = VisitRecord::new(key());
        first.diagnosis = serde_json::from_value(json!({
            "icd10_quickest": "J06.9",
            "full_icd10_list": "J06.9, R05"
        }))
        .unwrap();
        first.medication_history = serde_json::from_value(json!([
            { "medicine": "Paracetamol", "dosage": "500" },
            { "medicine": "Cetirizine", "dosage": "10" }
        ]))
        .unwrap();

        let mut second = VisitRecord::new(key());
        second.diagnosis = serde_json::from_value(json!({
            "full_icd10_list": "E11.9"
        }))
        .unwrap();

        let rows = medical_record_rows(&[], &[first, second]);
        assert_eq!(rows[0].conditions, "J06.9");
        assert_eq!(rows[0].medications, "Paracetamol 500mg, Cetirizine 10mg");
        assert_eq!(rows[0].visit_index, 0);
        assert_eq!(rows[1].conditions, "E11.9");
        assert_eq!(rows[1].medications, "None");
        assert_eq!(rows[1].visit_index, 1);
        assert!(rows.iter().all(|row| row.allergies == "None"));
    }

    #[test]
    fn rows_fill_display_defaults_for_bare_visits() {
        let rows = medical_record_rows(&[allergy("Dust", "Sneezing")], &[VisitRecord::new(key())]);
        let row = &rows[0];
        assert_eq!(row.purpose, "General Visit");
        assert_eq!(row.chief_complaints, "Not recorded");
        assert_eq!(row.conditions, "None");
        assert_eq!(row.treatment, "Not recorded");
        assert_eq!(row.recent_assessments, "No notes");
        assert_eq!(row.allergies, "Dust (Sneezing)");
        assert_eq!(row.date, "");
    }

    #[test]
    fn display_date_prefers_appointment_date() {
        let mut visit = VisitRecord::new(key());
        visit.created_at = Some(Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
        assert_eq!(visit_display_date(&visit), "3/14/2026");
        visit.appointment_date = Some("2026-03-20".to_string());
        assert_eq!(visit_display_date(&visit), "2026-03-20");
    }

    #[test]
    fn recent_visit_takes_the_head_of_the_sequence() {
        assert!(recent_visit(&[]).is_none());

        let mut newest = VisitRecord::new(key());
        newest.seen_by = Some("Dr. Mehta".to_string());
        newest.visit_type = Some("Follow-up".to_string());
        let older = VisitRecord::new(key());

        let card = recent_visit(&[newest, older]).unwrap();
        assert_eq!(card.doctor, "Dr. Mehta");
        assert_eq!(card.purpose, "Follow-up");
        assert_eq!(card.visit_index, 0);
    }

    #[test]
    fn recent_visit_defaults_unknown_doctor() {
        let card = recent_visit(&[VisitRecord::new(key())]).unwrap();
        assert_eq!(card.doctor, "Unknown Doctor");
        assert_eq!(card.purpose, "General Visit");
    }
}
