use chrono::NaiveDate;

use crate::domain::models::PregnancyRecord;
use crate::domain::pregnancy_calculator::PregnancyProgress;

#[derive(Debug, Clone)]
pub struct RegisterPregnancyCommand {
    pub last_period_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PregnancyOverview {
    pub pregnancy: PregnancyRecord,
    pub today: NaiveDate,
    pub progress: PregnancyProgress,
    pub warning_signs: &'static [&'static str],
}
