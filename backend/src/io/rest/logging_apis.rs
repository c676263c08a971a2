//! Frontend log lines written into the server log.

use axum::{http::StatusCode, response::Json};
use log::Level;
use shared::{ClientLogLevel, ClientLogRequest, ClientLogResponse};

const DEFAULT_SOURCE: &str = "web";

fn to_level(level: ClientLogLevel) -> Level {
    match level {
        ClientLogLevel::Debug => Level::Debug,
        ClientLogLevel::Info => Level::Info,
        ClientLogLevel::Warn => Level::Warn,
        ClientLogLevel::Error => Level::Error,
    }
}

/// Forward one frontend log line under the `client` target
pub async fn forward_client_log(
    Json(request): Json<ClientLogRequest>,
) -> (StatusCode, Json<ClientLogResponse>) {
    let source = request.source.as_deref().unwrap_or(DEFAULT_SOURCE);
    log::log!(
        target: "client",
        to_level(request.level),
        "[{}] {}",
        source,
        request.message
    );

    (StatusCode::ACCEPTED, Json(ClientLogResponse { accepted: true }))
}
