use chrono::NaiveDate;
use shared::{GatedContent, Tip};

use crate::domain::cycle_calculator::CyclePrediction;
use crate::domain::models::CycleRecord;

#[derive(Debug, Clone)]
pub struct SaveCycleCommand {
    pub last_period_date: String,
    pub cycle_length: u32,
    pub period_length: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CycleOverview {
    pub cycle: CycleRecord,
    pub today: NaiveDate,
    pub prediction: CyclePrediction,
    pub fertility_tips: GatedContent<Vec<Tip>>,
}
