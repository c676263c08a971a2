//! # Key-Value Storage
//!
//! Records are persisted as JSON strings under fixed keys, one file per key
//! in the data directory:
//!
//! ```text
//! data/
//! ├── cycleData.json       ← {"lastPeriodDate":"2024-01-01","cycleLength":28,"periodLength":5}
//! ├── pregnancyData.json   ← {"lastPeriodDate":"2024-01-01","dueDate":"2024-10-07"}
//! ├── children.json        ← [{"id":"child::…","name":"Ana","birthDate":"2024-01-01","gender":"female"}]
//! ├── growthRecords.json   ← [{"id":"growth::…","childId":"child::…","date":"2024-07-01",…}]
//! ├── userPlan.json        ← premium
//! └── userPhase.json       ← pregnancy
//! ```
//!
//! Every save rewrites the whole value for its key.

pub mod child_repository;
pub mod connection;
pub mod cycle_repository;
pub mod file_store;
pub mod growth_record_repository;
pub mod memory_store;
pub mod preference_repository;
pub mod pregnancy_repository;

#[cfg(test)]
pub mod test_utils;

pub use child_repository::ChildRepository;
pub use connection::{KvConnection, StorageKey};
pub use cycle_repository::CycleRepository;
pub use file_store::FileStore;
pub use growth_record_repository::GrowthRecordRepository;
pub use memory_store::MemoryStore;
pub use preference_repository::PreferenceRepository;
pub use pregnancy_repository::PregnancyRepository;
