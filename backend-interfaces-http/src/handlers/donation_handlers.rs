use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use backend_application::commands::donation_commands::{self, DonationOutcome, Rejection};
use backend_application::dtos::{DonationRequest, DonationResponse};
use backend_application::AppState;

pub async fn donate(
    State(state): State<AppState>,
    payload: Result<Json<DonationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable donation body");
            let outcome = DonationOutcome::Rejected(Rejection::MissingFields);
            return (StatusCode::BAD_REQUEST, Json(outcome.to_response())).into_response();
        }
    };

    let outcome = donation_commands::process_donation(&state, request).await;
    (outcome_status(&outcome), Json(outcome.to_response())).into_response()
}

pub async fn donate_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(DonationResponse {
            success: false,
            message: "Method not allowed".to_string(),
        }),
    )
        .into_response()
}

fn outcome_status(outcome: &DonationOutcome) -> StatusCode {
    match outcome {
        DonationOutcome::Granted(_) => StatusCode::OK,
        DonationOutcome::Rejected(rejection) => match rejection {
            Rejection::MissingFields | Rejection::InvalidInput => StatusCode::BAD_REQUEST,
            Rejection::PlayerNotFound | Rejection::PackageNotFound => StatusCode::NOT_FOUND,
            Rejection::PackageMisconfigured
            | Rejection::RemoteCommandFailed
            | Rejection::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}
