use anyhow::Result;
use log::info;

use super::connection::{KvConnection, StorageKey};
use crate::domain::models::Child;
use crate::storage::traits::ChildStorage;

/// Children stored as a single JSON array under `children`
#[derive(Clone)]
pub struct ChildRepository {
    connection: KvConnection,
}

impl ChildRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }
}

impl ChildStorage for ChildRepository {
    fn list_children(&self) -> Vec<Child> {
        self.connection
            .load(StorageKey::Children)
            .unwrap_or_default()
    }

    fn get_child(&self, child_id: &str) -> Option<Child> {
        self.list_children()
            .into_iter()
            .find(|child| child.id == child_id)
    }

    fn store_child(&self, child: &Child) -> Result<()> {
        let mut children = self.list_children();
        children.push(child.clone());
        self.connection.save(StorageKey::Children, &children)?;
        info!("Stored child {} ({} total)", child.id, children.len());
        Ok(())
    }
}
