// client/src/lib.rs
//
// Typed HTTP client for the portal API, shaped after the pages it
// feeds: profile info, medical records and the dashboard. Page-level
// views degrade per section instead of failing whole: each section
// fetch stands alone, and the social-history panel is assembled from up
// to 13 concurrent per-section requests.

use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use models::{Allergy, VisitRecord};
use portal::aggregate::{self, MedicalRecordRow, ProfileSummary, RecentVisit};
use portal::auth::Identity;
use portal::sections::{ContactView, DemographicsView, FamilyHistoryView, SocialHistoryView};
use portal::social::SocialSection;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("patient not found")]
    PatientNotFound,
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

// The insurance endpoint answers with its payload flattened beside
// `success` instead of under `data`.
#[derive(Debug, Deserialize)]
struct InsuranceEnvelope {
    success: bool,
    #[serde(default)]
    insurance: Option<models::InsuranceInfo>,
    #[serde(default)]
    message: Option<String>,
}

/// The profile page: every section fetched independently, each
/// degrading to absent on its own failure.
#[derive(Debug, Default, Serialize)]
pub struct ProfileInfo {
    pub demographics: Option<DemographicsView>,
    pub contact: Option<ContactView>,
    pub insurance: Option<models::InsuranceInfo>,
    pub allergies: Vec<Allergy>,
    pub family_history: Option<FamilyHistoryView>,
    pub social_history: Option<SocialHistoryView>,
}

/// The dashboard card: display name plus the most recent visit.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub patient_name: String,
    pub recent_visit: Option<RecentVisit>,
}

pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn envelope_failure(status: u16, message: Option<String>) -> ClientError {
        if status == 404 {
            ClientError::PatientNotFound
        } else {
            ClientError::Api {
                status,
                message: message.unwrap_or_else(|| "request failed".to_string()),
            }
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        let envelope: Envelope<T> = response.json().await?;
        if !envelope.success {
            return Err(Self::envelope_failure(status, envelope.message));
        }
        envelope.data.ok_or(ClientError::Api {
            status,
            message: "response carried no data".to_string(),
        })
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let status = response.status().as_u16();
        let envelope: Envelope<Identity> = response.json().await?;
        if !envelope.success {
            return Err(Self::envelope_failure(status, envelope.message));
        }
        envelope.data.ok_or(ClientError::Api {
            status,
            message: "login response carried no identity".to_string(),
        })
    }

    pub async fn demographics(&self, patient_id: &str) -> Result<DemographicsView, ClientError> {
        self.get_data(&format!("/api/patient-demographics/{patient_id}"))
            .await
    }

    pub async fn contact(&self, patient_id: &str) -> Result<ContactView, ClientError> {
        self.get_data(&format!("/api/contact-information/{patient_id}"))
            .await
    }

    pub async fn insurance(&self, patient_id: &str) -> Result<models::InsuranceInfo, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/insurance/{patient_id}")))
            .send()
            .await?;
        let status = response.status().as_u16();
        let envelope: InsuranceEnvelope = response.json().await?;
        if !envelope.success {
            return Err(Self::envelope_failure(status, envelope.message));
        }
        Ok(envelope.insurance.unwrap_or_default())
    }

    pub async fn allergies(&self, patient_id: &str) -> Result<Vec<Allergy>, ClientError> {
        self.get_data(&format!("/api/allergies/{patient_id}")).await
    }

    pub async fn family_history(&self, patient_id: &str) -> Result<FamilyHistoryView, ClientError> {
        self.get_data(&format!("/api/family-history/{patient_id}"))
            .await
    }

    pub async fn profile(&self, patient_id: &str) -> Result<ProfileSummary, ClientError> {
        self.get_data(&format!("/api/patients/{patient_id}/profile"))
            .await
    }

    pub async fn visits(&self, patient_id: &str) -> Result<Vec<VisitRecord>, ClientError> {
        self.get_data(&format!("/api/visits/{patient_id}")).await
    }

    /// One social-history section; `None` when nothing is recorded
    /// (the endpoint answers `data: null` for absent sections).
    pub async fn social_section(
        &self,
        patient_id: &str,
        section: SocialSection,
    ) -> Result<Option<Value>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!(
                "/api/social-history/{patient_id}/{}",
                section.key()
            )))
            .send()
            .await?;
        let status = response.status().as_u16();
        let envelope: Envelope<Value> = response.json().await?;
        if !envelope.success {
            return Err(Self::envelope_failure(status, envelope.message));
        }
        Ok(envelope.data.filter(|value| !value.is_null()))
    }

    /// The social-history panel assembled from 13 concurrent section
    /// fetches. A failing fetch degrades its own section to absent; the
    /// panel is absent only when no section could be read at all.
    pub async fn social_history(&self, patient_id: &str) -> Option<SocialHistoryView> {
        let fetches = SocialSection::ALL.map(|section| async move {
            match self.social_section(patient_id, section).await {
                Ok(value) => (section, value),
                Err(err) => {
                    tracing::warn!(section = section.key(), error = %err, "social section fetch failed");
                    (section, None)
                }
            }
        });

        let results = join_all(fetches).await;
        assemble_social_history(results)
    }

    /// The profile page fetch set: each section independent, failures
    /// degrade that one section only.
    pub async fn profile_info(&self, patient_id: &str) -> ProfileInfo {
        ProfileInfo {
            demographics: self.demographics(patient_id).await.ok(),
            contact: self.contact(patient_id).await.ok(),
            insurance: self.insurance(patient_id).await.ok(),
            allergies: self.allergies(patient_id).await.unwrap_or_default(),
            family_history: self.family_history(patient_id).await.ok(),
            social_history: self.social_history(patient_id).await,
        }
    }

    /// Medical-records rows: profile first (not-found short-circuits
    /// before visits are touched), then the raw visit sequence, reduced
    /// by the shared aggregation.
    pub async fn medical_records(
        &self,
        patient_id: &str,
    ) -> Result<Vec<MedicalRecordRow>, ClientError> {
        let profile = self.profile(patient_id).await?;
        let visits = self.visits(patient_id).await?;
        Ok(aggregate::medical_record_rows(&profile.allergies, &visits))
    }

    /// The dashboard: display name plus the most recent visit card.
    pub async fn dashboard(&self, patient_id: &str) -> Result<DashboardView, ClientError> {
        let demographics = self.demographics(patient_id).await?;
        let visits = self.visits(patient_id).await?;
        let patient_name = match demographics.name.first_last() {
            name if name.is_empty() => "Patient".to_string(),
            name => name,
        };
        Ok(DashboardView {
            patient_name,
            recent_visit: aggregate::recent_visit(&visits),
        })
    }
}

/// Folds per-section fetch results into the panel view. `None` when
/// every section came back absent or failed, mirroring a page that
/// leaves the panel unrendered.
fn assemble_social_history(
    results: impl IntoIterator<Item = (SocialSection, Option<Value>)>,
) -> Option<SocialHistoryView> {
    let mut view = SocialHistoryView::default();
    let mut any = false;
    for (section, value) in results {
        if value.is_some() {
            any = true;
        }
        let slot = match section {
            SocialSection::TobaccoSmoking => &mut view.tobacco_smoking,
            SocialSection::TobaccoConsumption => &mut view.tobacco_consumption,
            SocialSection::Alcohol => &mut view.alcohol,
            SocialSection::SocialText => &mut view.social_text,
            SocialSection::FinancialResources => &mut view.financial,
            SocialSection::Education => &mut view.education,
            SocialSection::PhysicalActivity => &mut view.physical_activity,
            SocialSection::Stress => &mut view.stress,
            SocialSection::SocialIsolation => &mut view.social_isolation,
            SocialSection::ExposureToViolence => &mut view.exposure_to_violence,
            SocialSection::GenderIdentity => &mut view.gender_identity,
            SocialSection::SexualOrientation => &mut view.sexual_orientation,
            SocialSection::NutrientsHistory => &mut view.nutrients,
        };
        *slot = value;
    }
    any.then_some(view)
}

#[cfg(test)]
mod tests {
    use super::assemble_social_history;
    use portal::social::SocialSection;
    use serde_json::json;

    #[test]
    fn panel_absent_when_every_section_failed_or_empty() {
        let results = SocialSection::ALL.map(|section| (section, None));
        assert!(assemble_social_history(results).is_none());
    }

    #[test]
    fn single_failed_section_degrades_alone() {
        let results = SocialSection::ALL.map(|section| {
            if section == SocialSection::Stress {
                // e.g. that one fetch failed
                (section, None)
            } else {
                (section, Some(json!({ "recorded": section.key() })))
            }
        });

        let view = assemble_social_history(results).expect("panel should render");
        assert!(view.stress.is_none());
        assert_eq!(view.alcohol, Some(json!({ "recorded": "alcohol" })));
        assert_eq!(
            view.nutrients,
            Some(json!({ "recorded": "nutrients-history" }))
        );
    }
}
