//! Inputs and outputs of the domain services.
//!
//! Commands carry raw values as received from a caller (dates as
//! `YYYY-MM-DD` strings); services validate and parse them. Results carry
//! domain models.

pub mod child;
pub mod cycle;
pub mod growth;
pub mod pregnancy;
pub mod subscription;
