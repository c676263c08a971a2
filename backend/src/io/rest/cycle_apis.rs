//! # REST API for the Cycle Tracker

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use shared::SaveCycleRequest;

use super::blocking::run_blocking;
use super::errors::{error_response, message_response, TodayQuery};
use super::mappers::CycleMapper;
use crate::AppState;

/// Get the stored cycle record
pub async fn get_cycle(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/cycle");

    let service = state.cycle_service.clone();
    match run_blocking(move || Ok(service.get_cycle())).await {
        Ok(Some(cycle)) => (StatusCode::OK, Json(CycleMapper::to_dto(cycle))).into_response(),
        Ok(None) => message_response(StatusCode::NOT_FOUND, "No cycle has been registered"),
        Err(e) => error_response("load cycle", e),
    }
}

/// Create or overwrite the cycle record
pub async fn save_cycle(
    State(state): State<AppState>,
    Json(request): Json<SaveCycleRequest>,
) -> impl IntoResponse {
    info!("PUT /api/cycle - request: {:?}", request);

    let service = state.cycle_service.clone();
    let command = CycleMapper::to_save_command(request);
    match run_blocking(move || service.save_cycle(command)).await {
        Ok(cycle) => (StatusCode::OK, Json(CycleMapper::to_dto(cycle))).into_response(),
        Err(e) => error_response("save cycle", e),
    }
}

/// Predictions and current phase for `today`
pub async fn get_cycle_overview(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> impl IntoResponse {
    info!("GET /api/cycle/overview - today: {:?}", query.today);

    let today = match query.resolve() {
        Ok(today) => today,
        Err(response) => return response,
    };

    let service = state.cycle_service.clone();
    match run_blocking(move || service.get_overview(today)).await {
        Ok(overview) => (StatusCode::OK, Json(CycleMapper::to_overview_dto(overview))).into_response(),
        Err(e) => error_response("load cycle overview", e),
    }
}
