// portal/src/store/mod.rs

use async_trait::async_trait;
use thiserror::Error;

use models::{PatientKey, PatientRecord, VisitRecord};

pub mod memory;
pub mod sled_store;

pub use memory::MemoryRecordStore;
pub use sled_store::SledRecordStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// The document store behind the portal. One patient document per key,
/// many visit documents per patient. Implementations own connection
/// lifecycle and concurrency limits; callers perform at most two
/// sequential fetches per request.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches the patient document for `key`, if one exists.
    async fn get_patient(&self, key: &PatientKey) -> Result<Option<PatientRecord>, StoreError>;

    /// Fetches every visit document for `key`, most recent first
    /// (descending `created_at`, visits without a timestamp last).
    async fn visits_for(&self, key: &PatientKey) -> Result<Vec<VisitRecord>, StoreError>;
}

/// Orders visits most-recent-first by creation time. Visits missing a
/// timestamp sort to the end.
pub(crate) fn sort_visits_descending(visits: &mut [VisitRecord]) {
    visits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
