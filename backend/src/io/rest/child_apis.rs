//! # REST API for Child Management
//!
//! Endpoints for creating, listing and retrieving children.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use shared::CreateChildRequest;

use super::blocking::run_blocking;
use super::errors::{error_response, message_response};
use super::mappers::ChildMapper;
use crate::domain::commands::child::CreateChildOutcome;
use crate::AppState;

/// Create a new child; rejected with 409 once the plan's limit is reached
pub async fn create_child(
    State(state): State<AppState>,
    Json(request): Json<CreateChildRequest>,
) -> impl IntoResponse {
    info!("POST /api/children - request: {:?}", request);

    let service = state.child_service.clone();
    let command = ChildMapper::to_create_command(request);
    match run_blocking(move || service.create_child(command)).await {
        Ok(CreateChildOutcome::Created(child)) => {
            let message = format!("{} foi adicionado(a) com sucesso", child.name);
            (
                StatusCode::CREATED,
                Json(ChildMapper::to_child_response_dto(child, &message)),
            )
                .into_response()
        }
        Ok(CreateChildOutcome::LimitReached { message }) => {
            message_response(StatusCode::CONFLICT, message)
        }
        Err(e) => error_response("create child", e),
    }
}

/// Get a child by ID
pub async fn get_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}", child_id);

    let service = state.child_service.clone();
    let id = child_id.clone();
    match run_blocking(move || Ok(service.get_child(&id))).await {
        Ok(Some(child)) => (StatusCode::OK, Json(ChildMapper::to_dto(child))).into_response(),
        Ok(None) => {
            message_response(StatusCode::NOT_FOUND, format!("Child not found: {}", child_id))
        }
        Err(e) => error_response("load child", e),
    }
}

/// List all children together with the plan's limit
pub async fn list_children(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/children");

    let service = state.child_service.clone();
    match run_blocking(move || Ok(service.list_children())).await {
        Ok(children) => {
            (StatusCode::OK, Json(ChildMapper::to_child_list_dto(children))).into_response()
        }
        Err(e) => error_response("list children", e),
    }
}
