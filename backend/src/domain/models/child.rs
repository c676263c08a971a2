use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::Gender;
use uuid::Uuid;

/// Domain model representing a child whose growth is tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

impl Child {
    /// Generate a unique ID for a child
    pub fn generate_id() -> String {
        format!("child::{}", Uuid::new_v4().simple())
    }
}
