//! # REST API for the selected life phase

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use shared::{PhaseResponse, SetPhaseRequest};

use super::blocking::run_blocking;
use super::errors::error_response;
use crate::AppState;

pub async fn get_phase(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/phase");

    let service = state.phase_service.clone();
    match run_blocking(move || Ok(service.get_phase())).await {
        Ok(phase) => (StatusCode::OK, Json(PhaseResponse { phase })).into_response(),
        Err(e) => error_response("load phase", e),
    }
}

pub async fn set_phase(
    State(state): State<AppState>,
    Json(request): Json<SetPhaseRequest>,
) -> impl IntoResponse {
    info!("PUT /api/phase - request: {:?}", request);

    let service = state.phase_service.clone();
    match run_blocking(move || service.set_phase(request.phase)).await {
        Ok(phase) => (StatusCode::OK, Json(PhaseResponse { phase: Some(phase) })).into_response(),
        Err(e) => error_response("save phase", e),
    }
}

/// Forget the selection so the phase picker is shown again
pub async fn clear_phase(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/phase");

    let service = state.phase_service.clone();
    match run_blocking(move || service.clear_phase()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("clear phase", e),
    }
}
