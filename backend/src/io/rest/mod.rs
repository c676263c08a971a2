//! # REST API Module
//!
//! HTTP handlers for the companion's trackers, all mounted under `/api`.
//!
//! ## Endpoints
//!
//! - `/cycle`, `/cycle/overview`: menstrual cycle record and predictions
//! - `/pregnancy`, `/pregnancy/overview`: pregnancy record and progress
//! - `/children`, `/children/:id`: child profiles, limited by plan
//! - `/children/:id/records`, `/children/:id/milestones`: growth tracking
//! - `/subscription`, `/plans`, `/checkout`: plans and the mock payment
//! - `/phase`: the life phase picked on first launch
//! - `/logs`: frontend log forwarding
//!
//! Overview endpoints accept `?today=YYYY-MM-DD`; without it the server's
//! local date is used. Errors are returned as `{"message": ...}`.

pub mod blocking;
pub mod child_apis;
pub mod cycle_apis;
pub mod errors;
pub mod growth_apis;
pub mod logging_apis;
pub mod mappers;
pub mod phase_apis;
pub mod pregnancy_apis;
pub mod subscription_apis;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/cycle",
            get(cycle_apis::get_cycle).put(cycle_apis::save_cycle),
        )
        .route("/cycle/overview", get(cycle_apis::get_cycle_overview))
        .route(
            "/pregnancy",
            get(pregnancy_apis::get_pregnancy).put(pregnancy_apis::register_pregnancy),
        )
        .route(
            "/pregnancy/overview",
            get(pregnancy_apis::get_pregnancy_overview),
        )
        .route(
            "/children",
            get(child_apis::list_children).post(child_apis::create_child),
        )
        .route("/children/:id", get(child_apis::get_child))
        .route(
            "/children/:id/records",
            get(growth_apis::list_growth_records).post(growth_apis::add_growth_record),
        )
        .route(
            "/children/:id/records/:record_id",
            delete(growth_apis::delete_growth_record),
        )
        .route("/children/:id/milestones", get(growth_apis::get_milestones))
        .route(
            "/subscription",
            get(subscription_apis::get_subscription).put(subscription_apis::set_subscription),
        )
        .route("/plans", get(subscription_apis::get_plans))
        .route("/checkout", post(subscription_apis::checkout))
        .route(
            "/phase",
            get(phase_apis::get_phase)
                .put(phase_apis::set_phase)
                .delete(phase_apis::clear_phase),
        )
        .route("/logs", post(logging_apis::forward_client_log))
}
