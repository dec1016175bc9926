use anyhow::anyhow;
use backend_domain::ports::RemoteError;
use tracing::info;

use crate::dtos::{BroadcastRequest, ConsoleResponse, GiveItemRequest};
use crate::{AppError, AppState};

pub async fn give_item(
    state: &AppState,
    payload: GiveItemRequest,
) -> Result<ConsoleResponse, AppError> {
    let response = state
        .console
        .give_item(&payload.username, &payload.item, payload.amount)
        .await
        .map_err(into_app_error)?;
    info!(username = %payload.username, item = %payload.item, "operator item grant sent");
    Ok(ConsoleResponse {
        success: true,
        response: response.trim().to_string(),
    })
}

pub async fn broadcast(
    state: &AppState,
    payload: BroadcastRequest,
) -> Result<ConsoleResponse, AppError> {
    let response = state
        .console
        .broadcast(&payload.message)
        .await
        .map_err(into_app_error)?;
    info!("operator broadcast sent");
    Ok(ConsoleResponse {
        success: true,
        response: response.trim().to_string(),
    })
}

pub async fn check_console(state: &AppState) -> Result<(), AppError> {
    state.console.probe().await.map_err(into_app_error)
}

fn into_app_error(err: RemoteError) -> AppError {
    match err {
        RemoteError::InvalidInput(cause) => AppError::BadRequest(cause.to_string()),
        RemoteError::Failed => AppError::Internal(anyhow!("remote command failed")),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{app_state, InMemoryStore, RecordingConsole};

    #[tokio::test]
    async fn give_item_reports_bad_amount_as_bad_request() {
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(Arc::new(InMemoryStore::default()), console.clone());

        let err = give_item(
            &state,
            GiveItemRequest {
                username: "Alex".to_string(),
                item: "minecraft:snowball".to_string(),
                amount: Some(0),
            },
        )
        .await
        .expect_err("reject amount");

        assert!(matches!(err, AppError::BadRequest(message) if message.contains("positive")));
        assert_eq!(console.call_count(), 0);
    }

    #[tokio::test]
    async fn broadcast_failure_is_internal() {
        let state = app_state(
            Arc::new(InMemoryStore::default()),
            Arc::new(RecordingConsole::failing()),
        );

        let err = broadcast(
            &state,
            BroadcastRequest {
                message: "Gift hunt in five minutes!".to_string(),
            },
        )
        .await
        .expect_err("remote down");
        assert!(matches!(err, AppError::Internal(_)));
        assert!(check_console(&state).await.is_err());
    }
}
