use anyhow::Result;
use log::info;

use super::connection::{KvConnection, StorageKey};
use crate::domain::models::PregnancyRecord;
use crate::storage::traits::PregnancyStorage;

#[derive(Clone)]
pub struct PregnancyRepository {
    connection: KvConnection,
}

impl PregnancyRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }
}

impl PregnancyStorage for PregnancyRepository {
    fn get_pregnancy(&self) -> Option<PregnancyRecord> {
        self.connection.load(StorageKey::PregnancyData)
    }

    fn store_pregnancy(&self, record: &PregnancyRecord) -> Result<()> {
        self.connection.save(StorageKey::PregnancyData, record)?;
        info!("Stored pregnancy due {}", record.due_date);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    #[test]
    fn test_store_and_get_pregnancy() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.connection.create_pregnancy_repository();
        assert_eq!(repo.get_pregnancy(), None);

        let record = PregnancyRecord::from_last_period(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        repo.store_pregnancy(&record).unwrap();
        assert_eq!(repo.get_pregnancy(), Some(record));
    }
}
