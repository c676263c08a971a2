//! # REST API for Growth Records and Development Milestones

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use shared::CreateGrowthRecordRequest;

use super::blocking::run_blocking;
use super::errors::{error_response, TodayQuery};
use super::mappers::GrowthMapper;
use crate::AppState;

/// List a child's measurements, newest first, each with its analysis
pub async fn list_growth_records(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/records", child_id);

    let service = state.growth_service.clone();
    let id = child_id.clone();
    match run_blocking(move || service.list_records(&id)).await {
        Ok(records) => {
            (StatusCode::OK, Json(GrowthMapper::to_list_dto(child_id, records))).into_response()
        }
        Err(e) => error_response("list growth records", e),
    }
}

pub async fn add_growth_record(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Json(request): Json<CreateGrowthRecordRequest>,
) -> impl IntoResponse {
    info!("POST /api/children/{}/records - request: {:?}", child_id, request);

    let service = state.growth_service.clone();
    let command = GrowthMapper::to_add_command(child_id, request);
    match run_blocking(move || service.add_record(command)).await {
        Ok(entry) => {
            (StatusCode::CREATED, Json(GrowthMapper::to_record_response_dto(entry))).into_response()
        }
        Err(e) => error_response("add growth record", e),
    }
}

pub async fn delete_growth_record(
    State(state): State<AppState>,
    Path((child_id, record_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/children/{}/records/{}", child_id, record_id);

    let service = state.growth_service.clone();
    match run_blocking(move || service.delete_record(&child_id, &record_id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("delete growth record", e),
    }
}

/// Development milestones for the child's current age
pub async fn get_milestones(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(query): Query<TodayQuery>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/milestones", child_id);

    let today = match query.resolve() {
        Ok(today) => today,
        Err(response) => return response,
    };

    let service = state.growth_service.clone();
    match run_blocking(move || service.get_milestones(&child_id, today)).await {
        Ok(milestones) => {
            (StatusCode::OK, Json(GrowthMapper::to_milestones_dto(milestones))).into_response()
        }
        Err(e) => error_response("load milestones", e),
    }
}
