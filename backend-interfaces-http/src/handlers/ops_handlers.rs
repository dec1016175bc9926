use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::commands::console_commands;
use backend_application::dtos::{BroadcastRequest, ConsoleResponse, GiveItemRequest};
use backend_application::queries::health_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::{authorize, authorize_operator};

#[derive(Serialize)]
struct ConsoleStatus {
    status: String,
}

pub async fn give_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GiveItemRequest>, JsonRejection>,
) -> Result<Json<ConsoleResponse>, HttpError> {
    if !authorize_operator(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload = read_body(payload)?;
    let response = console_commands::give_item(&state, payload).await?;
    Ok(Json(response))
}

pub async fn broadcast(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<BroadcastRequest>, JsonRejection>,
) -> Result<Json<ConsoleResponse>, HttpError> {
    if !authorize_operator(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload = read_body(payload)?;
    let response = console_commands::broadcast(&state, payload).await?;
    Ok(Json(response))
}

/// Body errors are reported only after the caller is authorized.
fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))
}

pub async fn console_check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorize_operator(&state.config, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ConsoleStatus {
                status: "unauthorized".to_string(),
            }),
        );
    }

    let timeout_secs = state.config.request_timeout_seconds.max(1);
    match timeout(
        Duration::from_secs(timeout_secs),
        console_commands::check_console(&state),
    )
    .await
    {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(ConsoleStatus {
                status: "ok".to_string(),
            }),
        ),
        Ok(Err(err)) => {
            error!("console check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ConsoleStatus {
                    status: "error".to_string(),
                }),
            )
        }
        Err(_) => {
            error!("console check timeout after {}s", timeout_secs);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ConsoleStatus {
                    status: "timeout".to_string(),
                }),
            )
        }
    }
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn health_ready(State(state): State<AppState>) -> StatusCode {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);
    match timeout(timeout_duration, health_queries::check_readiness(&state)).await {
        Ok(Ok(())) => StatusCode::OK,
        Ok(Err(err)) => {
            error!("ready check failed: {}", err);
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorize(&state.config, &headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized".to_string()).into_response();
    }
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
