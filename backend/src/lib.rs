//! # Vida Backend
//!
//! Non-UI logic for the Vida maternal health companion: a menstrual cycle
//! tracker, a pregnancy tracker and a child growth tracker, gated by a
//! subscription tier.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (web frontend)
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (calculators, services, entitlements)
//!     ↓
//! Storage Layer (key-value store of JSON records)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::AppConfig;
use crate::domain::{
    CheckoutService, ChildService, CycleService, GrowthService, PhaseService, PregnancyService,
    SubscriptionService,
};
use crate::storage::KvConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub cycle_service: CycleService,
    pub pregnancy_service: PregnancyService,
    pub child_service: ChildService,
    pub growth_service: GrowthService,
    pub subscription_service: SubscriptionService,
    pub phase_service: PhaseService,
}

/// Initialize the backend with records stored under the configured data directory
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage in {}", config.data_dir.display());
    let connection = KvConnection::open(&config.data_dir)?;
    Ok(initialize_with_connection(&connection, config.payment_delay))
}

/// Wire every service to `connection`
pub fn initialize_with_connection(connection: &KvConnection, payment_delay: Duration) -> AppState {
    info!("Setting up domain model");
    let checkout_service = CheckoutService::new(payment_delay);

    AppState {
        cycle_service: CycleService::new(connection),
        pregnancy_service: PregnancyService::new(connection),
        child_service: ChildService::new(connection),
        growth_service: GrowthService::new(connection),
        subscription_service: SubscriptionService::new(connection, checkout_service),
        phase_service: PhaseService::new(connection),
    }
}

/// Full application router: the API under `/api`, CORS for the frontend
/// origin and, if configured, static files for everything else
pub fn create_router(state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid frontend origin '{}'", config.frontend_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let mut router = Router::new().nest("/api", io::rest::api_router());
    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    Ok(router.layer(cors).with_state(state))
}
