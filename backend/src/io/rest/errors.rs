//! Translation of domain errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{Local, NaiveDate};
use log::{error, warn};
use serde::Deserialize;
use shared::ErrorResponse;

use crate::domain::checkout::CheckoutError;
use crate::domain::dates::parse_iso_date;
use crate::domain::errors::{NotFoundError, RecordValidationError, SubscriptionError};

pub fn status_for(e: &anyhow::Error) -> StatusCode {
    if e.downcast_ref::<RecordValidationError>().is_some()
        || e.downcast_ref::<CheckoutError>().is_some()
        || e.downcast_ref::<SubscriptionError>().is_some()
    {
        StatusCode::BAD_REQUEST
    } else if e.downcast_ref::<NotFoundError>().is_some() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Log `e` and turn it into a JSON error body with the matching status
pub fn error_response(action: &str, e: anyhow::Error) -> Response {
    let status = status_for(&e);
    if status.is_server_error() {
        error!("Failed to {}: {:#}", action, e);
        message_response(status, format!("Failed to {}", action))
    } else {
        warn!("Rejected request to {}: {}", action, e);
        message_response(status, e.to_string())
    }
}

/// Optional `?today=YYYY-MM-DD` override of the local date
#[derive(Debug, Default, Deserialize)]
pub struct TodayQuery {
    pub today: Option<String>,
}

impl TodayQuery {
    pub fn resolve(&self) -> Result<NaiveDate, Response> {
        match &self.today {
            None => Ok(Local::now().date_naive()),
            Some(value) => parse_iso_date(value).ok_or_else(|| {
                warn!("Invalid today parameter: {}", value);
                message_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid date '{}': expected YYYY-MM-DD", value),
                )
            }),
        }
    }
}
