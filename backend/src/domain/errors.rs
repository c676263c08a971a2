//! Error types raised by the domain services.
//!
//! Services return `anyhow::Result`; these typed errors travel inside it so the
//! io layer can downcast them and pick a status code.

use shared::SubscriptionTier;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecordValidationError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Cycle length must be between 21 and 35 days (got {0})")]
    CycleLengthOutOfRange(u32),
    #[error("Period length must be between 3 and 7 days (got {0})")]
    PeriodLengthOutOfRange(u32),
    #[error("Child name cannot be empty")]
    EmptyName,
    #[error("Child name cannot exceed 100 characters")]
    NameTooLong,
    #[error("{field} must be a positive number")]
    InvalidMeasurement { field: &'static str },
}

#[derive(Debug, Error, PartialEq)]
pub enum NotFoundError {
    #[error("Child not found: {0}")]
    Child(String),
    #[error("Growth record not found: {0}")]
    GrowthRecord(String),
    #[error("No cycle has been registered")]
    Cycle,
    #[error("No pregnancy has been registered")]
    Pregnancy,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubscriptionError {
    #[error("The {0} plan can only be activated through checkout")]
    CheckoutRequired(SubscriptionTier),
}
