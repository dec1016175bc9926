use backend_domain::ports::RemoteError;
use backend_domain::{BestEffort, DonationRecord, NewDonationRecord};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::dtos::{DonationRequest, DonationResponse};
use crate::AppState;

const GENERIC_FAILURE: &str =
    "An error occurred while processing your donation. Please try again or contact support.";

#[derive(Debug, Clone, PartialEq)]
pub enum DonationOutcome {
    Granted(Grant),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grant {
    pub username: String,
    pub package_name: String,
    pub audit: BestEffort<DonationRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingFields,
    InvalidInput,
    PlayerNotFound,
    PackageNotFound,
    /// The package points at a rank the game server does not know.
    PackageMisconfigured,
    RemoteCommandFailed,
    StoreFailure,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::MissingFields => "Username and package ID are required",
            Rejection::InvalidInput => "Invalid username or rank",
            Rejection::PlayerNotFound => {
                "Player not found. Make sure you have joined the server at least once."
            }
            Rejection::PackageNotFound => "Donation package not found",
            Rejection::PackageMisconfigured
            | Rejection::RemoteCommandFailed
            | Rejection::StoreFailure => GENERIC_FAILURE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::MissingFields => "missing_fields",
            Rejection::InvalidInput => "invalid_input",
            Rejection::PlayerNotFound => "player_not_found",
            Rejection::PackageNotFound => "package_not_found",
            Rejection::PackageMisconfigured => "package_misconfigured",
            Rejection::RemoteCommandFailed => "remote_command_failed",
            Rejection::StoreFailure => "store_failure",
        }
    }
}

impl DonationOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, DonationOutcome::Granted(_))
    }

    pub fn to_response(&self) -> DonationResponse {
        match self {
            DonationOutcome::Granted(grant) => DonationResponse {
                success: true,
                message: format!(
                    "Successfully upgraded {} to {} rank!",
                    grant.username, grant.package_name
                ),
            },
            DonationOutcome::Rejected(rejection) => DonationResponse {
                success: false,
                message: rejection.message().to_string(),
            },
        }
    }
}

/// Runs one donation request to a terminal outcome. Never returns an error:
/// every fault is folded into a `Rejection` with a bounded message.
pub async fn process_donation(state: &AppState, request: DonationRequest) -> DonationOutcome {
    state.metrics.record_donation_request();
    let span = info_span!("donation", trace_id = %Uuid::new_v4());
    let outcome = fulfil(state, request).instrument(span).await;

    match &outcome {
        DonationOutcome::Granted(_) => state.metrics.record_donation_granted(),
        DonationOutcome::Rejected(_) => state.metrics.record_donation_rejected(),
    }
    outcome
}

async fn fulfil(state: &AppState, request: DonationRequest) -> DonationOutcome {
    let (Some(username), Some(package_id)) = (
        present(request.username),
        present(request.package_id),
    ) else {
        return reject(Rejection::MissingFields);
    };

    let player = match state.players.find_player(&username).await {
        Ok(Some(player)) => player,
        Ok(None) => {
            info!(%username, "donation for unknown player");
            return reject(Rejection::PlayerNotFound);
        }
        Err(err) => {
            error!(%username, error = %err, "player lookup failed");
            return reject(Rejection::StoreFailure);
        }
    };

    let package = match state.catalog.find_package(&package_id).await {
        Ok(Some(package)) => package,
        Ok(None) => {
            info!(%package_id, "donation for unknown package");
            return reject(Rejection::PackageNotFound);
        }
        Err(err) => {
            error!(%package_id, error = %err, "package lookup failed");
            return reject(Rejection::StoreFailure);
        }
    };

    let Some(rank) = package.target_rank() else {
        error!(
            %package_id,
            rank = %package.rank,
            "package targets an unknown rank, refusing to send command"
        );
        return reject(Rejection::PackageMisconfigured);
    };

    match state.console.set_player_rank(&player.username, rank).await {
        Ok(response) => {
            info!(username = %player.username, %rank, response = %response.trim(), "rank granted");
        }
        Err(RemoteError::InvalidInput(err)) => {
            warn!(%username, error = %err, "donation arguments failed verification");
            return reject(Rejection::InvalidInput);
        }
        Err(RemoteError::Failed) => {
            state.metrics.record_remote_failure();
            return reject(Rejection::RemoteCommandFailed);
        }
    }

    let entry = NewDonationRecord::for_package(&player.username, &package);
    let audit = state.audit.record_donation(&entry).await;
    match &audit {
        BestEffort::Done(record) => debug!(record_id = %record.id, "donation recorded"),
        BestEffort::Unavailable => debug!("donation audit skipped, no write credentials"),
        BestEffort::Failed(cause) => {
            state.metrics.record_audit_failure();
            warn!(error = %cause, "donation audit write failed, grant stands");
        }
    }

    DonationOutcome::Granted(Grant {
        username: player.username,
        package_name: package.name,
        audit,
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn reject(rejection: Rejection) -> DonationOutcome {
    DonationOutcome::Rejected(rejection)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{app_state, package, player, seeded_store, RecordingConsole};

    fn request(username: &str, package_id: &str) -> DonationRequest {
        DonationRequest {
            username: Some(username.to_string()),
            package_id: Some(package_id.to_string()),
        }
    }

    #[tokio::test]
    async fn grants_rank_with_one_command() {
        let store = Arc::new(seeded_store());
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store.clone(), console.clone());

        let outcome = process_donation(&state, request("Steve123", "2")).await;

        assert!(outcome.is_granted());
        assert_eq!(
            console.sent(),
            vec!["/lp user Steve123 parent set reindeer".to_string()]
        );
        let response = outcome.to_response();
        assert!(response.success);
        assert_eq!(response.message, "Successfully upgraded Steve123 to Reindeer Rank rank!");
        assert_eq!(store.recorded_donations().len(), 1);
        assert_eq!(store.recorded_donations()[0].package_id, "2");
        assert_eq!(state.metrics.donations_granted(), 1);
    }

    #[tokio::test]
    async fn missing_or_blank_fields_are_rejected() {
        let store = Arc::new(seeded_store());
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store, console.clone());

        let cases = [
            DonationRequest::default(),
            DonationRequest {
                username: Some("Steve123".to_string()),
                package_id: None,
            },
            request("   ", "2"),
        ];
        for case in cases {
            let outcome = process_donation(&state, case).await;
            assert_eq!(outcome, DonationOutcome::Rejected(Rejection::MissingFields));
        }
        assert_eq!(console.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_player_never_reaches_console() {
        let store = Arc::new(seeded_store());
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store.clone(), console.clone());

        let outcome = process_donation(&state, request("Herobrine", "2")).await;

        assert_eq!(outcome, DonationOutcome::Rejected(Rejection::PlayerNotFound));
        assert_eq!(console.call_count(), 0);
        assert_eq!(store.write_attempts(), 0);
    }

    #[tokio::test]
    async fn unknown_package_never_reaches_console() {
        let store = Arc::new(seeded_store());
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store, console.clone());

        let outcome = process_donation(&state, request("Steve123", "99")).await;

        assert_eq!(outcome, DonationOutcome::Rejected(Rejection::PackageNotFound));
        assert_eq!(console.call_count(), 0);
    }

    #[tokio::test]
    async fn remote_failure_is_generic_and_skips_audit() {
        let store = Arc::new(seeded_store());
        let console = Arc::new(RecordingConsole::failing());
        let state = app_state(store.clone(), console.clone());

        let outcome = process_donation(&state, request("Steve123", "2")).await;

        assert_eq!(outcome, DonationOutcome::Rejected(Rejection::RemoteCommandFailed));
        assert_eq!(console.call_count(), 1);
        assert_eq!(
            outcome.to_response().message,
            "An error occurred while processing your donation. Please try again or contact support."
        );
        assert_eq!(store.write_attempts(), 0);
        assert_eq!(state.metrics.remote_command_failures(), 1);
    }

    #[tokio::test]
    async fn audit_failure_does_not_flip_grant() {
        let store = Arc::new(seeded_store());
        store.fail_writes.store(true, Ordering::SeqCst);
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store.clone(), console.clone());

        let outcome = process_donation(&state, request("Steve123", "3")).await;

        match outcome {
            DonationOutcome::Granted(grant) => {
                assert!(matches!(grant.audit, BestEffort::Failed(_)));
                assert_eq!(grant.package_name, "Santa+");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(store.write_attempts(), 1);
        assert_eq!(state.metrics.audit_write_failures(), 1);
    }

    #[tokio::test]
    async fn unavailable_audit_still_grants() {
        let store = Arc::new(seeded_store());
        store.writes_unavailable.store(true, Ordering::SeqCst);
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store, console);

        let outcome = process_donation(&state, request("Steve123", "1")).await;

        match outcome {
            DonationOutcome::Granted(grant) => assert_eq!(grant.audit, BestEffort::Unavailable),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_package_rank_is_refused_before_sending() {
        let store = Arc::new(
            seeded_store().with_packages(vec![package("7", "Grinch", 1, "op")]),
        );
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store, console.clone());

        let outcome = process_donation(&state, request("Steve123", "7")).await;

        assert_eq!(outcome, DonationOutcome::Rejected(Rejection::PackageMisconfigured));
        assert_eq!(console.call_count(), 0);
    }

    #[tokio::test]
    async fn store_outage_is_a_server_failure() {
        let store = Arc::new(seeded_store());
        store.fail_reads.store(true, Ordering::SeqCst);
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store, console.clone());

        let outcome = process_donation(&state, request("Steve123", "2")).await;

        assert_eq!(outcome, DonationOutcome::Rejected(Rejection::StoreFailure));
        assert_eq!(console.call_count(), 0);
    }

    #[tokio::test]
    async fn stored_username_with_disallowed_characters_is_refused() {
        let store = Arc::new(
            seeded_store().with_players(vec![player("Steve.123", 10, "player")]),
        );
        let console = Arc::new(RecordingConsole::default());
        let state = app_state(store.clone(), console.clone());

        let outcome = process_donation(&state, request("Steve.123", "2")).await;

        assert_eq!(outcome, DonationOutcome::Rejected(Rejection::InvalidInput));
        assert_eq!(outcome.to_response().message, "Invalid username or rank");
        assert_eq!(console.call_count(), 0);
        assert_eq!(store.write_attempts(), 0);
    }
}
