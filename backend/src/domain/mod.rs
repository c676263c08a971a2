//! # Domain Module
//!
//! Contains the business logic of the three trackers (menstrual cycle,
//! pregnancy, child growth) and the subscription gate in front of them.
//!
//! ## Module Organization
//!
//! - **dates**: Day/week/month arithmetic on calendar dates
//! - **reference**: Static tables (weekly milestones, growth standards, plans)
//! - **cycle_calculator / pregnancy_calculator / growth_evaluator**: Pure
//!   calculations over a stored record and an explicit `today`
//! - **entitlement**: Tier limits and gated content
//! - **checkout**: Card validation and the simulated payment delay
//! - ***_service**: Load records, validate input, call the calculators, save
//!
//! ## Core Concepts
//!
//! - **Derived values are never stored**: predictions, progress and percentile
//!   bands are recomputed on every read
//! - **Now is a parameter**: no calculator reads the clock
//! - **Limits are outcomes**: hitting the child limit returns a user-facing
//!   message instead of an error

pub mod checkout;
pub mod child_service;
pub mod commands;
pub mod cycle_calculator;
pub mod cycle_service;
pub mod dates;
pub mod entitlement;
pub mod errors;
pub mod growth_evaluator;
pub mod growth_service;
pub mod models;
pub mod phase_service;
pub mod pregnancy_calculator;
pub mod pregnancy_service;
pub mod reference;
pub mod subscription_service;

pub use checkout::CheckoutService;
pub use child_service::ChildService;
pub use cycle_service::CycleService;
pub use growth_service::GrowthService;
pub use phase_service::PhaseService;
pub use pregnancy_service::PregnancyService;
pub use subscription_service::SubscriptionService;
