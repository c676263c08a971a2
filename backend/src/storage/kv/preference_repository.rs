//! Tier and selected tracker, stored as bare strings (`premium`, `pregnancy`)
//! rather than JSON documents.

use anyhow::Result;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::connection::{KvConnection, StorageKey};
use crate::storage::traits::PreferenceStorage;
use shared::{SubscriptionTier, UserPhase};

#[derive(Clone)]
pub struct PreferenceRepository {
    connection: KvConnection,
}

impl PreferenceRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    fn load_value<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = self.connection.load_raw(key)?;
        match serde_json::from_value(serde_json::Value::String(raw.trim().to_string())) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Stored {} '{}' is not recognised: {}", key, raw, e);
                None
            }
        }
    }

    fn save_value<T: Serialize>(&self, key: StorageKey, value: &T) -> Result<()> {
        match serde_json::to_value(value)? {
            serde_json::Value::String(raw) => self.connection.save_raw(key, &raw),
            other => anyhow::bail!("{} must serialize to a string, got {}", key, other),
        }
    }
}

impl PreferenceStorage for PreferenceRepository {
    fn get_tier(&self) -> SubscriptionTier {
        self.load_value(StorageKey::UserPlan).unwrap_or_default()
    }

    fn store_tier(&self, tier: SubscriptionTier) -> Result<()> {
        self.save_value(StorageKey::UserPlan, &tier)?;
        info!("Subscription tier set to {}", tier);
        Ok(())
    }

    fn get_phase(&self) -> Option<UserPhase> {
        self.load_value(StorageKey::UserPhase)
    }

    fn store_phase(&self, phase: UserPhase) -> Result<()> {
        self.save_value(StorageKey::UserPhase, &phase)?;
        info!("User phase set to {:?}", phase);
        Ok(())
    }

    fn clear_phase(&self) -> Result<()> {
        self.connection.remove(StorageKey::UserPhase)?;
        info!("User phase cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::test_utils::TestEnvironment;

    #[test]
    fn test_tier_defaults_to_free() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.connection.create_preference_repository();
        assert_eq!(repo.get_tier(), SubscriptionTier::Free);

        env.connection.save_raw(StorageKey::UserPlan, "platinum").unwrap();
        assert_eq!(repo.get_tier(), SubscriptionTier::Free);
    }

    #[test]
    fn test_tier_is_stored_as_bare_string() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.connection.create_preference_repository();

        repo.store_tier(SubscriptionTier::Family).unwrap();
        assert_eq!(env.connection.load_raw(StorageKey::UserPlan).as_deref(), Some("family"));
        assert_eq!(repo.get_tier(), SubscriptionTier::Family);
    }

    #[test]
    fn test_phase_set_and_clear() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.connection.create_preference_repository();
        assert_eq!(repo.get_phase(), None);

        repo.store_phase(UserPhase::Pregnancy).unwrap();
        assert_eq!(env.connection.load_raw(StorageKey::UserPhase).as_deref(), Some("pregnancy"));
        assert_eq!(repo.get_phase(), Some(UserPhase::Pregnancy));

        repo.clear_phase().unwrap();
        assert_eq!(repo.get_phase(), None);
    }
}
