// portal/src/store/memory.rs

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use models::{PatientKey, PatientRecord, VisitRecord};

use super::{sort_visits_descending, RecordStore, StoreError};

/// In-memory record store used by tests and fixtures.
#[derive(Default)]
pub struct MemoryRecordStore {
    patients: RwLock<HashMap<PatientKey, PatientRecord>>,
    visits: RwLock<Vec<VisitRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_patient(&self, record: PatientRecord) {
        let mut patients = self.patients.write().expect("patients lock poisoned");
        patients.insert(record.id.clone(), record);
    }

    pub fn insert_visit(&self, visit: VisitRecord) {
        let mut visits = self.visits.write().expect("visits lock poisoned");
        visits.push(visit);
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get_patient(&self, key: &PatientKey) -> Result<Option<PatientRecord>, StoreError> {
        let patients = self.patients.read().expect("patients lock poisoned");
        Ok(patients.get(key).cloned())
    }

    async fn visits_for(&self, key: &PatientKey) -> Result<Vec<VisitRecord>, StoreError> {
        let visits = self.visits.read().expect("visits lock poisoned");
        let mut matching: Vec<VisitRecord> = visits
            .iter()
            .filter(|visit| &visit.patient_id == key)
            .cloned()
            .collect();
        sort_visits_descending(&mut matching);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryRecordStore;
    use crate::store::RecordStore;
    use chrono::{TimeZone, Utc};
    use models::{PatientKey, PatientRecord, VisitRecord};

    fn key(suffix: u8) -> PatientKey {
        PatientKey::new(format!("65f1c0ffee000000000000{:02x}", suffix)).unwrap()
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_patient() {
        let store = MemoryRecordStore::new();
        assert!(store.get_patient(&key(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_order_visits_most_recent_first() {
        let store = MemoryRecordStore::new();
        store.insert_patient(PatientRecord::new(key(1)));

        for (day, label) in [(3, "t3"), (14, "t1"), (9, "t2")] {
            let mut visit = VisitRecord::new(key(1));
            visit.created_at = Some(Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap());
            visit.visit_type = Some(label.to_string());
            store.insert_visit(visit);
        }

        let visits = store.visits_for(&key(1)).await.unwrap();
        let order: Vec<_> = visits
            .iter()
            .map(|v| v.visit_type.as_deref().unwrap())
            .collect();
        assert_eq!(order, ["t1", "t2", "t3"]);
    }

    #[tokio::test]
    async fn should_scope_visits_to_the_requested_patient() {
        let store = MemoryRecordStore::new();
        store.insert_visit(VisitRecord::new(key(1)));
        store.insert_visit(VisitRecord::new(key(2)));

        assert_eq!(store.visits_for(&key(1)).await.unwrap().len(), 1);
        assert!(store.visits_for(&key(3)).await.unwrap().is_empty());
    }
}
