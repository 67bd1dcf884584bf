// portal/src/store/sled_store.rs

use std::path::Path;

use async_trait::async_trait;

use models::{PatientKey, PatientRecord, VisitRecord};

use super::{sort_visits_descending, RecordStore, StoreError};

/// Record store backed by an embedded sled database. Documents are
/// stored as JSON, one tree per collection, namespaced by database name
/// so several logical databases can share one data directory.
pub struct SledRecordStore {
    db: sled::Db,
    patients: sled::Tree,
    visits: sled::Tree,
}

impl SledRecordStore {
    pub fn open(path: impl AsRef<Path>, db_name: &str) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let patients = db.open_tree(format!("{db_name}.patients"))?;
        let visits = db.open_tree(format!("{db_name}.visits"))?;
        Ok(Self { db, patients, visits })
    }

    /// Writes a patient document, replacing any existing document under
    /// the same key. Seeding/fixture helper; the portal itself never
    /// writes.
    pub fn put_patient(&self, record: &PatientRecord) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(record)?;
        self.patients.insert(record.id.as_str(), bytes)?;
        Ok(())
    }

    /// Writes a visit document. Visits without their own key get a
    /// store-generated one.
    pub fn put_visit(&self, visit: &VisitRecord) -> Result<(), StoreError> {
        let key = match &visit.id {
            Some(id) => id.clone(),
            None => format!("visit-{:020}", self.db.generate_id()?),
        };
        let bytes = serde_json::to_vec(visit)?;
        self.visits.insert(key.as_bytes(), bytes)?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for SledRecordStore {
    async fn get_patient(&self, key: &PatientKey) -> Result<Option<PatientRecord>, StoreError> {
        match self.patients.get(key.as_str())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn visits_for(&self, key: &PatientKey) -> Result<Vec<VisitRecord>, StoreError> {
        let mut matching = Vec::new();
        for entry in self.visits.iter() {
            let (_, bytes) = entry?;
            let visit: VisitRecord = serde_json::from_slice(&bytes)?;
            if &visit.patient_id == key {
                matching.push(visit);
            }
        }
        sort_visits_descending(&mut matching);
        Ok(matching)
    }
}
