use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error};

use backend_application::commands::feedback_commands;
use backend_application::dtos::FeedbackRequest;
use backend_application::{AppError, AppState};

pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable feedback body");
            return error_response(StatusCode::BAD_REQUEST, "All fields are required.");
        }
    };

    match feedback_commands::submit_feedback(&state, request).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(AppError::BadRequest(message)) => error_response(StatusCode::BAD_REQUEST, &message),
        Err(err) => {
            error!(error = %err, "feedback could not be saved");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to save feedback at this time.",
            )
        }
    }
}

pub async fn feedback_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
