use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dates::add_weeks;

/// Full-term gestation in weeks
pub const FULL_TERM_WEEKS: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyRecord {
    pub last_period_date: NaiveDate,
    /// Stored alongside the LMP; always `last_period_date + 40 weeks` when saved
    pub due_date: NaiveDate,
}

impl PregnancyRecord {
    pub fn from_last_period(last_period_date: NaiveDate) -> Self {
        Self {
            last_period_date,
            due_date: add_weeks(last_period_date, FULL_TERM_WEEKS as i64),
        }
    }
}
