//! # REST API for Subscriptions and the Mock Checkout

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use shared::{CheckoutRequest, SetSubscriptionRequest};

use super::blocking::run_blocking;
use super::errors::error_response;
use super::mappers::SubscriptionMapper;
use crate::AppState;

/// Current tier with its entitlements
pub async fn get_subscription(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/subscription");

    let service = state.subscription_service.clone();
    match run_blocking(move || Ok(service.get_subscription())).await {
        Ok(status) => (StatusCode::OK, Json(SubscriptionMapper::to_dto(status))).into_response(),
        Err(e) => error_response("load subscription", e),
    }
}

/// Switch tier directly; paid tiers are rejected and must go through checkout
pub async fn set_subscription(
    State(state): State<AppState>,
    Json(request): Json<SetSubscriptionRequest>,
) -> impl IntoResponse {
    info!("PUT /api/subscription - request: {:?}", request);

    let service = state.subscription_service.clone();
    match run_blocking(move || service.set_tier(request.tier)).await {
        Ok(status) => (StatusCode::OK, Json(SubscriptionMapper::to_dto(status))).into_response(),
        Err(e) => error_response("update subscription", e),
    }
}

pub async fn get_plans(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/plans");

    let service = state.subscription_service.clone();
    match run_blocking(move || Ok(service.get_plan_catalog())).await {
        Ok(catalog) => {
            (StatusCode::OK, Json(SubscriptionMapper::to_catalog_dto(catalog))).into_response()
        }
        Err(e) => error_response("load plans", e),
    }
}

/// Validate the card, wait out the simulated processing time, then upgrade
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> impl IntoResponse {
    // Card details stay out of the log
    info!("POST /api/checkout - tier: {}", request.tier);

    match state
        .subscription_service
        .checkout(SubscriptionMapper::to_checkout_command(request))
        .await
    {
        Ok(status) => {
            (StatusCode::OK, Json(SubscriptionMapper::to_checkout_dto(status))).into_response()
        }
        Err(e) => error_response("complete checkout", e),
    }
}
