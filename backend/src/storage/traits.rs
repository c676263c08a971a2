//! # Storage Traits
//!
//! The key-value abstraction every backend implements, plus the per-record
//! storage interfaces the domain services work against.
//!
//! Reads never fail: a missing, unreadable or corrupt value is reported as
//! absent (or empty for collections) and logged. Writes return errors.

use anyhow::Result;
use shared::{SubscriptionTier, UserPhase};

use crate::domain::models::{Child, CycleRecord, GrowthRecord, PregnancyRecord};

/// Durable string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

pub trait CycleStorage: Send + Sync {
    fn get_cycle(&self) -> Option<CycleRecord>;

    /// Replace the stored cycle record
    fn store_cycle(&self, record: &CycleRecord) -> Result<()>;
}

pub trait PregnancyStorage: Send + Sync {
    fn get_pregnancy(&self) -> Option<PregnancyRecord>;

    fn store_pregnancy(&self, record: &PregnancyRecord) -> Result<()>;
}

pub trait ChildStorage: Send + Sync {
    /// All children in creation order
    fn list_children(&self) -> Vec<Child>;

    fn get_child(&self, child_id: &str) -> Option<Child>;

    /// Append a child to the stored collection
    fn store_child(&self, child: &Child) -> Result<()>;
}

pub trait GrowthRecordStorage: Send + Sync {
    /// Records of one child in insertion order
    fn list_records(&self, child_id: &str) -> Vec<GrowthRecord>;

    fn store_record(&self, record: &GrowthRecord) -> Result<()>;

    /// Returns true if the record was found and deleted
    fn delete_record(&self, child_id: &str, record_id: &str) -> Result<bool>;
}

pub trait PreferenceStorage: Send + Sync {
    /// Stored tier; absent or unreadable values yield the free tier
    fn get_tier(&self) -> SubscriptionTier;

    fn store_tier(&self, tier: SubscriptionTier) -> Result<()>;

    fn get_phase(&self) -> Option<UserPhase>;

    fn store_phase(&self, phase: UserPhase) -> Result<()>;

    fn clear_phase(&self) -> Result<()>;
}
