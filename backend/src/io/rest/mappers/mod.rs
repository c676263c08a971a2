//! Conversions between domain models and the `shared` DTOs.
//!
//! Domain models hold `NaiveDate`s; DTOs carry `YYYY-MM-DD` strings.

pub mod child_mapper;
pub mod cycle_mapper;
pub mod growth_mapper;
pub mod pregnancy_mapper;
pub mod subscription_mapper;

pub use child_mapper::ChildMapper;
pub use cycle_mapper::CycleMapper;
pub use growth_mapper::GrowthMapper;
pub use pregnancy_mapper::PregnancyMapper;
pub use subscription_mapper::SubscriptionMapper;
