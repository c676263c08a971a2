use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::RecordValidationError;

pub const MIN_CYCLE_LENGTH: u32 = 21;
pub const MAX_CYCLE_LENGTH: u32 = 35;
pub const MIN_PERIOD_LENGTH: u32 = 3;
pub const MAX_PERIOD_LENGTH: u32 = 7;

/// The user's menstrual cycle as last registered; overwritten on every edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRecord {
    pub last_period_date: NaiveDate,
    pub cycle_length: u32,
    pub period_length: u32,
}

impl CycleRecord {
    /// Build a record, rejecting lengths outside the supported ranges
    pub fn new(
        last_period_date: NaiveDate,
        cycle_length: u32,
        period_length: u32,
    ) -> Result<Self, RecordValidationError> {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&cycle_length) {
            return Err(RecordValidationError::CycleLengthOutOfRange(cycle_length));
        }
        if !(MIN_PERIOD_LENGTH..=MAX_PERIOD_LENGTH).contains(&period_length) {
            return Err(RecordValidationError::PeriodLengthOutOfRange(period_length));
        }
        Ok(Self {
            last_period_date,
            cycle_length,
            period_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_new_accepts_boundaries() {
        assert!(CycleRecord::new(date(), 21, 3).is_ok());
        assert!(CycleRecord::new(date(), 35, 7).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            CycleRecord::new(date(), 20, 5),
            Err(RecordValidationError::CycleLengthOutOfRange(20))
        ));
        assert!(matches!(
            CycleRecord::new(date(), 36, 5),
            Err(RecordValidationError::CycleLengthOutOfRange(36))
        ));
        assert!(matches!(
            CycleRecord::new(date(), 28, 2),
            Err(RecordValidationError::PeriodLengthOutOfRange(2))
        ));
        assert!(matches!(
            CycleRecord::new(date(), 28, 8),
            Err(RecordValidationError::PeriodLengthOutOfRange(8))
        ));
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = CycleRecord::new(date(), 28, 5).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["lastPeriodDate"], "2024-01-01");
        assert_eq!(json["cycleLength"], 28);
        assert_eq!(json["periodLength"], 5);
    }
}
