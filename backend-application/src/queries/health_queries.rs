use anyhow::anyhow;

use crate::{AppError, AppState};

/// Ready when the store answers, or when the service runs without one.
pub async fn check_readiness(state: &AppState) -> Result<(), AppError> {
    if !state.store_mode.is_configured() {
        return Ok(());
    }
    state
        .players
        .ping()
        .await
        .map_err(|err| AppError::Internal(anyhow!("store ping failed: {}", err)))
}
