//! # REST API for the Pregnancy Tracker

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use shared::RegisterPregnancyRequest;

use super::blocking::run_blocking;
use super::errors::{error_response, message_response, TodayQuery};
use super::mappers::PregnancyMapper;
use crate::AppState;

pub async fn get_pregnancy(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/pregnancy");

    let service = state.pregnancy_service.clone();
    match run_blocking(move || Ok(service.get_pregnancy())).await {
        Ok(Some(record)) => (StatusCode::OK, Json(PregnancyMapper::to_dto(record))).into_response(),
        Ok(None) => message_response(StatusCode::NOT_FOUND, "No pregnancy has been registered"),
        Err(e) => error_response("load pregnancy", e),
    }
}

/// Register a pregnancy from the last menstrual period
pub async fn register_pregnancy(
    State(state): State<AppState>,
    Json(request): Json<RegisterPregnancyRequest>,
) -> impl IntoResponse {
    info!("PUT /api/pregnancy - request: {:?}", request);

    let service = state.pregnancy_service.clone();
    let command = PregnancyMapper::to_register_command(request);
    match run_blocking(move || service.register_pregnancy(command)).await {
        Ok(record) => (StatusCode::OK, Json(PregnancyMapper::to_dto(record))).into_response(),
        Err(e) => error_response("register pregnancy", e),
    }
}

pub async fn get_pregnancy_overview(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> impl IntoResponse {
    info!("GET /api/pregnancy/overview - today: {:?}", query.today);

    let today = match query.resolve() {
        Ok(today) => today,
        Err(response) => return response,
    };

    let service = state.pregnancy_service.clone();
    match run_blocking(move || service.get_overview(today)).await {
        Ok(overview) => {
            (StatusCode::OK, Json(PregnancyMapper::to_overview_dto(overview))).into_response()
        }
        Err(e) => error_response("load pregnancy overview", e),
    }
}
