use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    ChildRepository, CycleRepository, FileStore, GrowthRecordRepository, MemoryStore,
    PreferenceRepository, PregnancyRepository,
};
use crate::storage::traits::KeyValueStore;

/// Keys under which records are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    CycleData,
    PregnancyData,
    Children,
    GrowthRecords,
    UserPlan,
    UserPhase,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::CycleData => "cycleData",
            StorageKey::PregnancyData => "pregnancyData",
            StorageKey::Children => "children",
            StorageKey::GrowthRecords => "growthRecords",
            StorageKey::UserPlan => "userPlan",
            StorageKey::UserPhase => "userPhase",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed access to a key-value store, shared by all repositories
#[derive(Clone)]
pub struct KvConnection {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl KvConnection {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Serialize a read-check-write sequence against every clone of this
    /// connection. Hold the guard until the final save has returned.
    pub fn lock_writes(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| anyhow!("Storage write lock poisoned"))
    }

    /// Connection backed by `<key>.json` files in `data_directory`
    pub fn open<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        Ok(Self::new(Arc::new(FileStore::new(data_directory)?)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Raw string under `key`; read failures are logged and treated as absent
    pub fn load_raw(&self, key: StorageKey) -> Option<String> {
        match self.store.get(key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {}: {:#}. Treating as absent.", key, e);
                None
            }
        }
    }

    /// JSON record under `key`; unreadable or corrupt values load as absent
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = self.load_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!("Loaded {}", key);
                Some(value)
            }
            Err(e) => {
                warn!("Stored {} is not valid: {}. Treating as absent.", key, e);
                None
            }
        }
    }

    pub fn save_raw(&self, key: StorageKey, value: &str) -> Result<()> {
        self.store
            .set(key.as_str(), value)
            .with_context(|| format!("Failed to save {}", key))
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize {}", key))?;
        self.save_raw(key, &json)
    }

    pub fn remove(&self, key: StorageKey) -> Result<()> {
        self.store
            .remove(key.as_str())
            .with_context(|| format!("Failed to remove {}", key))
    }

    pub fn create_cycle_repository(&self) -> CycleRepository {
        CycleRepository::new(self.clone())
    }

    pub fn create_pregnancy_repository(&self) -> PregnancyRepository {
        PregnancyRepository::new(self.clone())
    }

    pub fn create_child_repository(&self) -> ChildRepository {
        ChildRepository::new(self.clone())
    }

    pub fn create_growth_record_repository(&self) -> GrowthRecordRepository {
        GrowthRecordRepository::new(self.clone())
    }

    pub fn create_preference_repository(&self) -> PreferenceRepository {
        PreferenceRepository::new(self.clone())
    }
}
