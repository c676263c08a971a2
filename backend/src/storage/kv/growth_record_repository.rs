use anyhow::Result;
use log::{info, warn};

use super::connection::{KvConnection, StorageKey};
use crate::domain::models::GrowthRecord;
use crate::storage::traits::GrowthRecordStorage;

/// Growth records of every child, stored as one JSON array under `growthRecords`
#[derive(Clone)]
pub struct GrowthRecordRepository {
    connection: KvConnection,
}

impl GrowthRecordRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    fn load_all(&self) -> Vec<GrowthRecord> {
        self.connection
            .load(StorageKey::GrowthRecords)
            .unwrap_or_default()
    }
}

impl GrowthRecordStorage for GrowthRecordRepository {
    fn list_records(&self, child_id: &str) -> Vec<GrowthRecord> {
        self.load_all()
            .into_iter()
            .filter(|record| record.child_id == child_id)
            .collect()
    }

    fn store_record(&self, record: &GrowthRecord) -> Result<()> {
        let mut records = self.load_all();
        records.push(record.clone());
        self.connection.save(StorageKey::GrowthRecords, &records)?;
        info!("Stored growth record {} for child {}", record.id, record.child_id);
        Ok(())
    }

    fn delete_record(&self, child_id: &str, record_id: &str) -> Result<bool> {
        let mut records = self.load_all();
        let original_len = records.len();
        records.retain(|record| !(record.id == record_id && record.child_id == child_id));

        if records.len() == original_len {
            warn!("Growth record {} not found for child {}", record_id, child_id);
            return Ok(false);
        }

        self.connection.save(StorageKey::GrowthRecords, &records)?;
        info!("Deleted growth record {} for child {}", record_id, child_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    fn record(child_id: &str, day: u32) -> GrowthRecord {
        GrowthRecord {
            id: GrowthRecord::generate_id(),
            child_id: child_id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
            age_months: 5,
            weight: 7.2,
            height: 66.0,
            head_circumference: 42.0,
        }
    }

    #[test]
    fn test_records_are_scoped_to_child() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.connection.create_growth_record_repository();

        let first = record("child::a", 1);
        let second = record("child::b", 2);
        repo.store_record(&first).unwrap();
        repo.store_record(&second).unwrap();

        assert_eq!(repo.list_records("child::a"), vec![first]);
        assert_eq!(repo.list_records("child::b"), vec![second]);
        assert!(repo.list_records("child::c").is_empty());
    }

    #[test]
    fn test_delete_record() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.connection.create_growth_record_repository();
        let kept = record("child::a", 1);
        let deleted = record("child::a", 2);
        repo.store_record(&kept).unwrap();
        repo.store_record(&deleted).unwrap();

        // Wrong child leaves the record in place
        assert!(!repo.delete_record("child::b", &deleted.id).unwrap());
        assert!(repo.delete_record("child::a", &deleted.id).unwrap());
        assert!(!repo.delete_record("child::a", &deleted.id).unwrap());

        assert_eq!(repo.list_records("child::a"), vec![kept]);
    }
}
