use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One measurement of a child. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRecord {
    pub id: String,
    pub child_id: String,
    pub date: NaiveDate,
    /// Derived from the child's birth date when the record is saved
    pub age_months: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    /// Centimeters; recorded for display only
    pub head_circumference: f64,
}

impl GrowthRecord {
    pub fn generate_id() -> String {
        format!("growth::{}", Uuid::new_v4().simple())
    }
}
