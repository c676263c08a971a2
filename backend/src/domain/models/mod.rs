//! Domain models persisted through the key-value store.
//!
//! Field names serialize in camelCase and dates as `YYYY-MM-DD` so the stored
//! JSON stays readable by the web client that originally wrote it.

use chrono::NaiveDate;

use crate::domain::dates::parse_iso_date;
use crate::domain::errors::RecordValidationError;

pub mod child;
pub mod cycle;
pub mod growth_record;
pub mod pregnancy;

pub use child::Child;
pub use cycle::CycleRecord;
pub use growth_record::GrowthRecord;
pub use pregnancy::PregnancyRecord;

/// Parse a `YYYY-MM-DD` field of an incoming command
pub fn parse_record_date(value: &str) -> Result<NaiveDate, RecordValidationError> {
    parse_iso_date(value).ok_or_else(|| RecordValidationError::InvalidDate(value.to_string()))
}
