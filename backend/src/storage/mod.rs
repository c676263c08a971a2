//! Persistence for the trackers.
//!
//! The domain layer only sees the traits in [`traits`]; [`kv`] implements
//! them on top of a string key-value store.

pub mod kv;
pub mod traits;

pub use kv::{KvConnection, StorageKey};
pub use traits::{
    ChildStorage, CycleStorage, GrowthRecordStorage, KeyValueStore, PreferenceStorage,
    PregnancyStorage,
};
