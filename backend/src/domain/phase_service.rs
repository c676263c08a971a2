use anyhow::Result;
use log::debug;
use shared::UserPhase;

use crate::storage::kv::{KvConnection, PreferenceRepository};
use crate::storage::traits::PreferenceStorage;

/// Tracks which tracker the user selected on the landing screen
#[derive(Clone)]
pub struct PhaseService {
    preference_repository: PreferenceRepository,
}

impl PhaseService {
    pub fn new(connection: &KvConnection) -> Self {
        Self {
            preference_repository: connection.create_preference_repository(),
        }
    }

    pub fn get_phase(&self) -> Option<UserPhase> {
        let phase = self.preference_repository.get_phase();
        debug!("Current phase: {:?}", phase);
        phase
    }

    pub fn set_phase(&self, phase: UserPhase) -> Result<UserPhase> {
        self.preference_repository.store_phase(phase)?;
        Ok(phase)
    }

    /// Return to the landing screen
    pub fn clear_phase(&self) -> Result<()> {
        self.preference_repository.clear_phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_lifecycle() {
        let connection = KvConnection::in_memory();
        let service = PhaseService::new(&connection);
        assert_eq!(service.get_phase(), None);

        service.set_phase(UserPhase::Cycle).unwrap();
        assert_eq!(service.get_phase(), Some(UserPhase::Cycle));

        service.set_phase(UserPhase::Postpartum).unwrap();
        assert_eq!(service.get_phase(), Some(UserPhase::Postpartum));

        service.clear_phase().unwrap();
        assert_eq!(service.get_phase(), None);
    }
}
