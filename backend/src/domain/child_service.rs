use anyhow::Result;
use log::{info, warn};

use crate::domain::commands::child::{CreateChildCommand, CreateChildOutcome, ListChildrenResult};
use crate::domain::entitlement::{check_child_capacity, CapacityCheck, Entitlements};
use crate::domain::errors::RecordValidationError;
use crate::domain::models::{parse_record_date, Child};
use crate::storage::kv::{ChildRepository, KvConnection, PreferenceRepository};
use crate::storage::traits::{ChildStorage, PreferenceStorage};

const MAX_NAME_CHARS: usize = 100;

/// Service for managing the children whose growth is tracked
#[derive(Clone)]
pub struct ChildService {
    connection: KvConnection,
    child_repository: ChildRepository,
    preference_repository: PreferenceRepository,
}

impl ChildService {
    pub fn new(connection: &KvConnection) -> Self {
        Self {
            connection: connection.clone(),
            child_repository: connection.create_child_repository(),
            preference_repository: connection.create_preference_repository(),
        }
    }

    /// Create a child unless the current tier's limit has been reached
    pub fn create_child(&self, command: CreateChildCommand) -> Result<CreateChildOutcome> {
        info!(
            "Creating child: name={}, birth_date={}",
            command.name, command.birth_date
        );

        let name = Self::validate_name(&command.name)?;
        let birth_date = parse_record_date(&command.birth_date)?;

        // Count and append under one lock
        let _guard = self.connection.lock_writes()?;
        let tier = self.preference_repository.get_tier();
        let existing = self.child_repository.list_children().len();
        if let CapacityCheck::LimitReached { message } = check_child_capacity(tier, existing) {
            warn!("Child limit reached on {} plan ({} children)", tier, existing);
            return Ok(CreateChildOutcome::LimitReached { message });
        }

        let child = Child {
            id: Child::generate_id(),
            name,
            birth_date,
            gender: command.gender,
        };
        self.child_repository.store_child(&child)?;

        info!("Created child: {} with ID: {}", child.name, child.id);
        Ok(CreateChildOutcome::Created(child))
    }

    pub fn get_child(&self, child_id: &str) -> Option<Child> {
        let child = self.child_repository.get_child(child_id);
        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }
        child
    }

    pub fn list_children(&self) -> ListChildrenResult {
        let children = self.child_repository.list_children();
        let tier = self.preference_repository.get_tier();
        info!("Found {} children", children.len());

        ListChildrenResult {
            children,
            max_children: Entitlements::for_tier(tier).max_children,
        }
    }

    fn validate_name(name: &str) -> Result<String, RecordValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(RecordValidationError::NameTooLong);
        }
        Ok(trimmed.to_string())
    }
}
