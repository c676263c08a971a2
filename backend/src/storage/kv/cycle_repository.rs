use anyhow::Result;
use log::info;

use super::connection::{KvConnection, StorageKey};
use crate::domain::models::CycleRecord;
use crate::storage::traits::CycleStorage;

#[derive(Clone)]
pub struct CycleRepository {
    connection: KvConnection,
}

impl CycleRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }
}

impl CycleStorage for CycleRepository {
    fn get_cycle(&self) -> Option<CycleRecord> {
        self.connection.load(StorageKey::CycleData)
    }

    fn store_cycle(&self, record: &CycleRecord) -> Result<()> {
        self.connection.save(StorageKey::CycleData, record)?;
        info!(
            "Stored cycle starting {} ({} day cycle)",
            record.last_period_date, record.cycle_length
        );
        Ok(())
    }
}
