//! Test environment backed by a temporary data directory that is removed on
//! drop, even when a test panics.

use anyhow::Result;
use chrono::NaiveDate;
use shared::Gender;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::KvConnection;
use crate::domain::models::Child;
use crate::storage::traits::ChildStorage;

pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub connection: KvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = KvConnection::open(&base_path)?;
        Ok(Self {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Store a child born 2024-01-01 and return it
    pub fn create_test_child(&self, name: &str) -> Child {
        let child = Child {
            id: Child::generate_id(),
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            gender: Gender::Female,
        };
        self.connection
            .create_child_repository()
            .store_child(&child)
            .unwrap();
        child
    }
}
