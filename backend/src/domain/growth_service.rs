//! Growth measurements and development milestones for a child.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::domain::commands::growth::{AddGrowthRecordCommand, AnalyzedGrowthRecord, ChildMilestones};
use crate::domain::dates::age_in_months;
use crate::domain::entitlement::{gate, DEVELOPMENT_MILESTONES};
use crate::domain::errors::{NotFoundError, RecordValidationError};
use crate::domain::growth_evaluator;
use crate::domain::models::{parse_record_date, Child, GrowthRecord};
use crate::storage::kv::{ChildRepository, GrowthRecordRepository, KvConnection, PreferenceRepository};
use crate::storage::traits::{ChildStorage, GrowthRecordStorage, PreferenceStorage};

#[derive(Clone)]
pub struct GrowthService {
    connection: KvConnection,
    child_repository: ChildRepository,
    growth_record_repository: GrowthRecordRepository,
    preference_repository: PreferenceRepository,
}

impl GrowthService {
    pub fn new(connection: &KvConnection) -> Self {
        Self {
            connection: connection.clone(),
            child_repository: connection.create_child_repository(),
            growth_record_repository: connection.create_growth_record_repository(),
            preference_repository: connection.create_preference_repository(),
        }
    }

    fn require_child(&self, child_id: &str) -> Result<Child, NotFoundError> {
        self.child_repository
            .get_child(child_id)
            .ok_or_else(|| NotFoundError::Child(child_id.to_string()))
    }

    fn validate_measurement(field: &'static str, value: f64) -> Result<f64, RecordValidationError> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(RecordValidationError::InvalidMeasurement { field })
        }
    }

    fn analyze(child: &Child, record: GrowthRecord) -> AnalyzedGrowthRecord {
        let analysis =
            growth_evaluator::analyze(child.gender, record.age_months, record.weight, record.height);
        AnalyzedGrowthRecord { record, analysis }
    }

    /// Store a measurement; the age in months is derived from the child's birth date
    pub fn add_record(&self, command: AddGrowthRecordCommand) -> Result<AnalyzedGrowthRecord> {
        info!(
            "Adding growth record for child {}: date={}, weight={}, height={}",
            command.child_id, command.date, command.weight, command.height
        );

        let child = self.require_child(&command.child_id)?;
        let date = parse_record_date(&command.date)?;
        let weight = Self::validate_measurement("weight", command.weight)?;
        let height = Self::validate_measurement("height", command.height)?;
        let head_circumference =
            Self::validate_measurement("head circumference", command.head_circumference)?;

        let record = GrowthRecord {
            id: GrowthRecord::generate_id(),
            child_id: child.id.clone(),
            date,
            age_months: age_in_months(child.birth_date, date),
            weight,
            height,
            head_circumference,
        };
        {
            let _guard = self.connection.lock_writes()?;
            self.growth_record_repository.store_record(&record)?;
        }

        let analyzed = Self::analyze(&child, record);
        if !analyzed.analysis.alerts.is_empty() {
            info!(
                "Growth record {} raised {} alert(s)",
                analyzed.record.id,
                analyzed.analysis.alerts.len()
            );
        }
        Ok(analyzed)
    }

    /// Records of a child, newest first
    pub fn list_records(&self, child_id: &str) -> Result<Vec<AnalyzedGrowthRecord>> {
        let child = self.require_child(child_id)?;

        let mut records = self.growth_record_repository.list_records(child_id);
        records.sort_by(|a, b| b.date.cmp(&a.date));

        info!("Found {} growth records for child {}", records.len(), child_id);
        Ok(records
            .into_iter()
            .map(|record| Self::analyze(&child, record))
            .collect())
    }

    pub fn delete_record(&self, child_id: &str, record_id: &str) -> Result<()> {
        self.require_child(child_id)?;
        let _guard = self.connection.lock_writes()?;
        if !self.growth_record_repository.delete_record(child_id, record_id)? {
            return Err(NotFoundError::GrowthRecord(record_id.to_string()).into());
        }
        Ok(())
    }

    /// Milestones for the child's age on `today`, when the tier unlocks them
    pub fn get_milestones(&self, child_id: &str, today: NaiveDate) -> Result<ChildMilestones> {
        let child = self.require_child(child_id)?;
        let age_months = age_in_months(child.birth_date, today);
        let tier = self.preference_repository.get_tier();

        Ok(ChildMilestones {
            milestones: gate(tier, DEVELOPMENT_MILESTONES, || {
                growth_evaluator::milestones_for_age(age_months)
            }),
            child,
            age_months,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::test_utils::TestEnvironment;
    use shared::{AlertSeverity, GatedContent, PercentileBand, SubscriptionTier};

    fn command(child_id: &str, date: &str, weight: f64) -> AddGrowthRecordCommand {
        AddGrowthRecordCommand {
            child_id: child_id.to_string(),
            date: date.to_string(),
            weight,
            height: 67.0,
            head_circumference: 43.0,
        }
    }

    fn boy(env: &TestEnvironment) -> Child {
        let child = Child {
            id: Child::generate_id(),
            name: "Lucas".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            gender: shared::Gender::Male,
        };
        env.connection
            .create_child_repository()
            .store_child(&child)
            .unwrap();
        child
    }

    #[test]
    fn test_underweight_record_raises_referral() {
        let env = TestEnvironment::new().unwrap();
        let service = GrowthService::new(&env.connection);
        let child = boy(&env);

        let entry = service.add_record(command(&child.id, "2024-07-01", 5.5)).unwrap();
        assert_eq!(entry.record.age_months, 5);
        assert!(entry.record.id.starts_with("growth::"));
        assert_eq!(entry.analysis.reference_age_months, 6);
        assert_eq!(entry.analysis.weight_band, PercentileBand::BelowP3);
        assert_eq!(entry.analysis.alerts[0].severity, AlertSeverity::Referral);
    }

    #[test]
    fn test_records_listed_newest_first() {
        let env = TestEnvironment::new().unwrap();
        let service = GrowthService::new(&env.connection);
        let child = boy(&env);

        service.add_record(command(&child.id, "2024-03-01", 5.8)).unwrap();
        service.add_record(command(&child.id, "2024-07-01", 7.9)).unwrap();
        service.add_record(command(&child.id, "2024-05-01", 7.0)).unwrap();

        let dates: Vec<String> = service
            .list_records(&child.id)
            .unwrap()
            .iter()
            .map(|entry| entry.record.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-07-01", "2024-05-01", "2024-03-01"]);
    }

    #[test]
    fn test_concurrent_adds_are_all_kept() {
        let env = TestEnvironment::new().unwrap();
        let service = GrowthService::new(&env.connection);
        let child = boy(&env);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let service = service.clone();
                let child_id = child.id.clone();
                scope.spawn(move || {
                    service.add_record(command(&child_id, "2024-07-01", 7.9)).unwrap();
                });
            }
        });

        assert_eq!(service.list_records(&child.id).unwrap().len(), 8);
    }

    #[test]
    fn test_delete_record() {
        let env = TestEnvironment::new().unwrap();
        let service = GrowthService::new(&env.connection);
        let child = boy(&env);
        let entry = service.add_record(command(&child.id, "2024-07-01", 7.9)).unwrap();

        service.delete_record(&child.id, &entry.record.id).unwrap();
        assert!(service.list_records(&child.id).unwrap().is_empty());

        let err = service.delete_record(&child.id, &entry.record.id).unwrap_err();
        assert_eq!(
            err.downcast_ref::<NotFoundError>(),
            Some(&NotFoundError::GrowthRecord(entry.record.id.clone()))
        );
    }

    #[test]
    fn test_rejects_invalid_measurements() {
        let env = TestEnvironment::new().unwrap();
        let service = GrowthService::new(&env.connection);
        let child = boy(&env);

        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = service.add_record(command(&child.id, "2024-07-01", weight)).unwrap_err();
            assert_eq!(
                err.downcast_ref::<RecordValidationError>(),
                Some(&RecordValidationError::InvalidMeasurement { field: "weight" })
            );
        }
        assert!(service.list_records(&child.id).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_child() {
        let env = TestEnvironment::new().unwrap();
        let service = GrowthService::new(&env.connection);

        let err = service.add_record(command("child::missing", "2024-07-01", 7.0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<NotFoundError>(),
            Some(&NotFoundError::Child("child::missing".to_string()))
        );
        assert!(service.list_records("child::missing").is_err());
    }

    #[test]
    fn test_milestones_are_gated() {
        let env = TestEnvironment::new().unwrap();
        let service = GrowthService::new(&env.connection);
        let child = boy(&env);
        let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();

        let locked = service.get_milestones(&child.id, today).unwrap();
        assert_eq!(locked.age_months, 9);
        assert!(matches!(locked.milestones, GatedContent::Locked { .. }));

        env.connection
            .create_preference_repository()
            .store_tier(SubscriptionTier::Premium)
            .unwrap();
        let unlocked = service.get_milestones(&child.id, today).unwrap();
        assert_eq!(
            unlocked.milestones.content(),
            Some(&growth_evaluator::milestones_for_age(9))
        );
    }
}
