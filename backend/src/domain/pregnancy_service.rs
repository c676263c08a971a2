use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};

use crate::domain::commands::pregnancy::{PregnancyOverview, RegisterPregnancyCommand};
use crate::domain::errors::NotFoundError;
use crate::domain::models::{parse_record_date, PregnancyRecord};
use crate::domain::pregnancy_calculator;
use crate::domain::reference::PREGNANCY_WARNING_SIGNS;
use crate::storage::kv::{KvConnection, PregnancyRepository};
use crate::storage::traits::PregnancyStorage;

#[derive(Clone)]
pub struct PregnancyService {
    pregnancy_repository: PregnancyRepository,
}

impl PregnancyService {
    pub fn new(connection: &KvConnection) -> Self {
        Self {
            pregnancy_repository: connection.create_pregnancy_repository(),
        }
    }

    pub fn get_pregnancy(&self) -> Option<PregnancyRecord> {
        debug!("Getting pregnancy record");
        self.pregnancy_repository.get_pregnancy()
    }

    /// Store a pregnancy, deriving the due date from the last period
    pub fn register_pregnancy(&self, command: RegisterPregnancyCommand) -> Result<PregnancyRecord> {
        info!("Registering pregnancy: last_period_date={}", command.last_period_date);

        let last_period_date = parse_record_date(&command.last_period_date)?;
        let record = PregnancyRecord::from_last_period(last_period_date);
        self.pregnancy_repository.store_pregnancy(&record)?;

        Ok(record)
    }

    pub fn get_overview(&self, today: NaiveDate) -> Result<PregnancyOverview> {
        let pregnancy = self
            .pregnancy_repository
            .get_pregnancy()
            .ok_or(NotFoundError::Pregnancy)?;

        let progress = pregnancy_calculator::progress(&pregnancy, today);
        debug!(
            "Pregnancy overview for {}: week {} (trimester {})",
            today, progress.current_week, progress.trimester
        );

        Ok(PregnancyOverview {
            pregnancy,
            today,
            progress,
            warning_signs: &PREGNANCY_WARNING_SIGNS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RecordValidationError;
    use crate::storage::kv::test_utils::TestEnvironment;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn register(service: &PregnancyService, lmp: &str) -> Result<PregnancyRecord> {
        service.register_pregnancy(RegisterPregnancyCommand {
            last_period_date: lmp.to_string(),
        })
    }

    #[test]
    fn test_register_derives_due_date() {
        let env = TestEnvironment::new().unwrap();
        let service = PregnancyService::new(&env.connection);

        let record = register(&service, "2024-01-01").unwrap();
        assert_eq!(record.due_date, date(2024, 10, 7));
        assert_eq!(service.get_pregnancy(), Some(record));
    }

    #[test]
    fn test_overview_for_week_sixteen() {
        let env = TestEnvironment::new().unwrap();
        let service = PregnancyService::new(&env.connection);
        register(&service, "2024-01-01").unwrap();

        let overview = service.get_overview(date(2024, 4, 22)).unwrap();
        assert_eq!(overview.progress.current_week, 16);
        assert_eq!(overview.progress.trimester, 2);
        assert_eq!(overview.warning_signs.len(), 5);
    }

    #[test]
    fn test_reregistering_replaces_record() {
        let env = TestEnvironment::new().unwrap();
        let service = PregnancyService::new(&env.connection);
        register(&service, "2024-01-01").unwrap();
        register(&service, "2024-02-01").unwrap();

        assert_eq!(service.get_pregnancy().unwrap().due_date, date(2024, 11, 7));
    }

    #[test]
    fn test_errors() {
        let env = TestEnvironment::new().unwrap();
        let service = PregnancyService::new(&env.connection);

        let err = service.get_overview(date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.downcast_ref::<NotFoundError>(), Some(&NotFoundError::Pregnancy));

        for input in ["not a date", "+262142-12-01"] {
            let err = register(&service, input).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<RecordValidationError>(),
                Some(RecordValidationError::InvalidDate(_))
            ));
        }
        assert_eq!(service.get_pregnancy(), None);
    }
}
