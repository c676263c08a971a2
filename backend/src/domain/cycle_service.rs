use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};

use crate::domain::commands::cycle::{CycleOverview, SaveCycleCommand};
use crate::domain::cycle_calculator;
use crate::domain::entitlement::{gate, ADVANCED_FERTILITY_TIPS};
use crate::domain::errors::NotFoundError;
use crate::domain::models::{parse_record_date, CycleRecord};
use crate::domain::reference::FERTILITY_TIPS;
use crate::storage::kv::{CycleRepository, KvConnection, PreferenceRepository};
use crate::storage::traits::{CycleStorage, PreferenceStorage};

#[derive(Clone)]
pub struct CycleService {
    cycle_repository: CycleRepository,
    preference_repository: PreferenceRepository,
}

impl CycleService {
    pub fn new(connection: &KvConnection) -> Self {
        Self {
            cycle_repository: connection.create_cycle_repository(),
            preference_repository: connection.create_preference_repository(),
        }
    }

    pub fn get_cycle(&self) -> Option<CycleRecord> {
        debug!("Getting cycle record");
        self.cycle_repository.get_cycle()
    }

    /// Validate and overwrite the stored cycle
    pub fn save_cycle(&self, command: SaveCycleCommand) -> Result<CycleRecord> {
        info!(
            "Saving cycle: last_period_date={}, cycle_length={}, period_length={}",
            command.last_period_date, command.cycle_length, command.period_length
        );

        let last_period_date = parse_record_date(&command.last_period_date)?;
        let record = CycleRecord::new(last_period_date, command.cycle_length, command.period_length)?;
        self.cycle_repository.store_cycle(&record)?;

        Ok(record)
    }

    /// Predictions for `today`, with fertility tips gated by the current tier
    pub fn get_overview(&self, today: NaiveDate) -> Result<CycleOverview> {
        let cycle = self.cycle_repository.get_cycle().ok_or(NotFoundError::Cycle)?;
        let tier = self.preference_repository.get_tier();

        let prediction = cycle_calculator::predict(&cycle, today);
        debug!(
            "Cycle overview for {}: day {} ({:?})",
            today, prediction.day_in_cycle, prediction.current_phase
        );

        Ok(CycleOverview {
            cycle,
            today,
            prediction,
            fertility_tips: gate(tier, ADVANCED_FERTILITY_TIPS, || FERTILITY_TIPS.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RecordValidationError;
    use crate::storage::kv::test_utils::TestEnvironment;
    use shared::{CyclePhase, GatedContent, SubscriptionTier};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn command(last_period_date: &str, cycle_length: u32) -> SaveCycleCommand {
        SaveCycleCommand {
            last_period_date: last_period_date.to_string(),
            cycle_length,
            period_length: 5,
        }
    }

    #[test]
    fn test_save_and_overview() {
        let env = TestEnvironment::new().unwrap();
        let service = CycleService::new(&env.connection);
        assert_eq!(service.get_cycle(), None);

        let saved = service.save_cycle(command("2024-01-01", 28)).unwrap();
        assert_eq!(service.get_cycle(), Some(saved));

        let overview = service.get_overview(date(2024, 1, 12)).unwrap();
        assert_eq!(overview.prediction.ovulation_date, date(2024, 1, 15));
        assert_eq!(overview.prediction.next_period_date, date(2024, 1, 29));
        assert_eq!(overview.prediction.current_phase, CyclePhase::Follicular);
        assert!(matches!(overview.fertility_tips, GatedContent::Locked { .. }));
    }

    #[test]
    fn test_premium_unlocks_fertility_tips() {
        let env = TestEnvironment::new().unwrap();
        let service = CycleService::new(&env.connection);
        env.connection
            .create_preference_repository()
            .store_tier(SubscriptionTier::Premium)
            .unwrap();

        service.save_cycle(command("2024-01-01", 28)).unwrap();
        let overview = service.get_overview(date(2024, 1, 12)).unwrap();
        assert_eq!(overview.fertility_tips.content().map(Vec::len), Some(7));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let env = TestEnvironment::new().unwrap();
        let service = CycleService::new(&env.connection);

        let err = service.save_cycle(command("2024-13-01", 28)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordValidationError>(),
            Some(&RecordValidationError::InvalidDate("2024-13-01".to_string()))
        );

        let err = service.save_cycle(command("2024-01-01", 40)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordValidationError>(),
            Some(&RecordValidationError::CycleLengthOutOfRange(40))
        );
        assert_eq!(service.get_cycle(), None);
    }

    #[test]
    fn test_extended_year_is_rejected() {
        let env = TestEnvironment::new().unwrap();
        let service = CycleService::new(&env.connection);

        let err = service.save_cycle(command("+262142-12-20", 28)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordValidationError>(),
            Some(&RecordValidationError::InvalidDate("+262142-12-20".to_string()))
        );
        assert_eq!(service.get_cycle(), None);
    }

    #[test]
    fn test_overview_without_cycle() {
        let env = TestEnvironment::new().unwrap();
        let service = CycleService::new(&env.connection);
        let err = service.get_overview(date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.downcast_ref::<NotFoundError>(), Some(&NotFoundError::Cycle));
    }
}
