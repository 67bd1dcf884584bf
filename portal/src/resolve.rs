// portal/src/resolve.rs

use std::str::FromStr;

use models::{PatientKey, PatientRecord};

use crate::store::{RecordStore, StoreError};

/// Resolves an opaque identifier to a patient document with exactly one
/// store fetch. A syntactically invalid identifier resolves to `None`,
/// indistinguishable from an unknown key, so callers never leak the
/// store's key format. Store failures propagate as errors, never as
/// not-found.
pub async fn resolve_patient(
    store: &dyn RecordStore,
    raw_id: &str,
) -> Result<Option<PatientRecord>, StoreError> {
    let key = match PatientKey::from_str(raw_id) {
        Ok(key) => key,
        Err(_) => return Ok(None),
    };
    store.get_patient(&key).await
}
