// portal/src/auth.rs
//
// Single-factor login: the patient's own record key is the secondary
// credential handed out out-of-band, checked against the stored first
// name. A deliberate simplification carried over from the deployed
// system; there is no hashing, token issuance or lockout, and callers
// must treat the scheme accordingly.

use serde::{Deserialize, Serialize};

use crate::errors::PortalError;
use crate::resolve::resolve_patient;
use crate::store::RecordStore;

/// The minimal identity assertion returned on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub patient_id: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Authenticates a username (patient first name) against an identifier
/// claim (the record key). The first-name comparison ignores
/// surrounding whitespace and case; everything that goes wrong short of
/// a store failure collapses into `InvalidCredentials`.
pub async fn authenticate(
    store: &dyn RecordStore,
    username: &str,
    password: &str,
) -> Result<Identity, PortalError> {
    if username.is_empty() || password.is_empty() {
        return Err(PortalError::MissingCredentials);
    }

    let patient = resolve_patient(store, password)
        .await?
        .ok_or(PortalError::InvalidCredentials)?;

    let first_name = patient.name.first.as_deref().unwrap_or_default();
    if normalize(first_name) != normalize(username) {
        return Err(PortalError::InvalidCredentials);
    }

    Ok(Identity {
        patient_id: patient.id.to_string(),
        full_name: patient.name.full(),
        first_name: first_name.to_string(),
        last_name: patient.name.last.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::authenticate;
    use crate::errors::PortalError;
    use crate::store::MemoryRecordStore;
    use models::{PatientKey, PatientRecord};
    use serde_json::json;

    const ID: &str = "65f1c0ffee00000000000001";

    fn seeded_store() -> MemoryRecordStore {
        let store = MemoryRecordStore::new();
        let mut record = PatientRecord::new(PatientKey::new(ID).unwrap());
        record.name = serde_json::from_value(json!({
            "first": "Jane",
            "middle": "Q",
            "last": "Doe"
        }))
        .unwrap();
        store.insert_patient(record);
        store
    }

    #[tokio::test]
    async fn login_succeeds_with_matching_first_name() {
        let store = seeded_store();
        let identity = authenticate(&store, "Jane", ID).await.unwrap();
        assert_eq!(identity.patient_id, ID);
        assert_eq!(identity.full_name, "Jane Q Doe");
        assert_eq!(identity.first_name, "Jane");
        assert_eq!(identity.last_name, "Doe");
    }

    #[tokio::test]
    async fn first_name_check_ignores_case_and_whitespace() {
        let store = seeded_store();
        assert!(authenticate(&store, "  jAnE ", ID).await.is_ok());
        assert!(matches!(
            authenticate(&store, "Janet", ID).await,
            Err(PortalError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_before_any_lookup() {
        let store = seeded_store();
        assert!(matches!(
            authenticate(&store, "", ID).await,
            Err(PortalError::MissingCredentials)
        ));
        assert!(matches!(
            authenticate(&store, "Jane", "").await,
            Err(PortalError::MissingCredentials)
        ));
    }

    #[tokio::test]
    async fn bad_or_unknown_identifier_is_unauthorized() {
        let store = seeded_store();
        // Malformed key: same outcome as an unknown one.
        assert!(matches!(
            authenticate(&store, "Jane", "short").await,
            Err(PortalError::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&store, "Jane", "65f1c0ffee00000000000099").await,
            Err(PortalError::InvalidCredentials)
        ));
    }
}
