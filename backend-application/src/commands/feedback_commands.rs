use anyhow::anyhow;
use backend_domain::{BestEffort, Feedback, NewFeedback};
use tracing::{info, warn};

use crate::dtos::FeedbackRequest;
use crate::{AppError, AppState};

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 254;
const MAX_MESSAGE_CHARS: usize = 5000;

pub async fn submit_feedback(
    state: &AppState,
    payload: FeedbackRequest,
) -> Result<Feedback, AppError> {
    let entry = match validate_feedback(payload) {
        Ok(entry) => entry,
        Err(err) => {
            state.metrics.record_feedback(false);
            return Err(err);
        }
    };

    match state.audit.submit_feedback(&entry).await {
        BestEffort::Done(feedback) => {
            state.metrics.record_feedback(true);
            info!(feedback_id = %feedback.id, "feedback stored");
            Ok(feedback)
        }
        BestEffort::Unavailable => {
            state.metrics.record_feedback(false);
            warn!("feedback dropped, store has no write credentials");
            Err(AppError::Internal(anyhow!("feedback store unavailable")))
        }
        BestEffort::Failed(cause) => {
            state.metrics.record_feedback(false);
            warn!(error = %cause, "feedback insert failed");
            Err(AppError::Internal(anyhow!("feedback insert failed: {}", cause)))
        }
    }
}

/// Trims every field and checks presence, email shape, then length bounds.
pub fn validate_feedback(payload: FeedbackRequest) -> Result<NewFeedback, AppError> {
    let name = trimmed(payload.name);
    let email = trimmed(payload.email);
    let message = trimmed(payload.message);

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(AppError::BadRequest("All fields are required.".to_string()));
    }
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest("Please provide a valid email.".to_string()));
    }
    check_length("Name", &name, MAX_NAME_CHARS)?;
    check_length("Email", &email, MAX_EMAIL_CHARS)?;
    check_length("Message", &message, MAX_MESSAGE_CHARS)?;

    Ok(NewFeedback {
        name,
        email,
        message,
    })
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

fn trimmed(value: Option<String>) -> String {
    value.map(|value| value.trim().to_string()).unwrap_or_default()
}

fn check_length(label: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters.",
            label, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{app_state, InMemoryStore, RecordingConsole};

    fn payload(name: &str, email: &str, message: &str) -> FeedbackRequest {
        FeedbackRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn email_shape_matches_site_rules() {
        assert!(is_valid_email("elf@northpole.org"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("elf@northpole"));
        assert!(!is_valid_email("elf@.org"));
        assert!(!is_valid_email("elf@org."));
        assert!(!is_valid_email("@northpole.org"));
        assert!(!is_valid_email("elf@@northpole.org"));
        assert!(!is_valid_email("elf @northpole.org"));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_before_any_write() {
        let store = Arc::new(InMemoryStore::default());
        let state = app_state(store.clone(), Arc::new(RecordingConsole::default()));

        let err = submit_feedback(&state, payload("Elf", "not-an-email", "Hi"))
            .await
            .expect_err("reject email");
        match err {
            AppError::BadRequest(message) => assert_eq!(message, "Please provide a valid email."),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(store.write_attempts(), 0);
    }

    #[tokio::test]
    async fn blank_fields_are_missing() {
        let store = Arc::new(InMemoryStore::default());
        let state = app_state(store.clone(), Arc::new(RecordingConsole::default()));

        let err = submit_feedback(&state, payload("Elf", "elf@northpole.org", "   "))
            .await
            .expect_err("reject blank");
        assert!(matches!(err, AppError::BadRequest(message) if message == "All fields are required."));
        assert_eq!(store.write_attempts(), 0);
    }

    #[tokio::test]
    async fn stores_trimmed_values() {
        let store = Arc::new(InMemoryStore::default());
        let state = app_state(store.clone(), Arc::new(RecordingConsole::default()));

        submit_feedback(&state, payload(" Elf ", "elf@northpole.org ", " More snow please "))
            .await
            .expect("stored");

        let saved = store.recorded_feedback();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Elf");
        assert_eq!(saved[0].message, "More snow please");
    }

    #[tokio::test]
    async fn overlong_message_is_rejected() {
        let store = Arc::new(InMemoryStore::default());
        let state = app_state(store.clone(), Arc::new(RecordingConsole::default()));
        let long = "❄".repeat(MAX_MESSAGE_CHARS + 1);

        let err = submit_feedback(&state, payload("Elf", "elf@northpole.org", &long))
            .await
            .expect_err("reject length");
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(store.write_attempts(), 0);
    }

    #[tokio::test]
    async fn failed_or_unavailable_write_is_internal() {
        let store = Arc::new(InMemoryStore::default());
        store.fail_writes.store(true, Ordering::SeqCst);
        let state = app_state(store.clone(), Arc::new(RecordingConsole::default()));
        let err = submit_feedback(&state, payload("Elf", "elf@northpole.org", "Hi"))
            .await
            .expect_err("write failure");
        assert!(matches!(err, AppError::Internal(_)));

        store.fail_writes.store(false, Ordering::SeqCst);
        store.writes_unavailable.store(true, Ordering::SeqCst);
        let err = submit_feedback(&state, payload("Elf", "elf@northpole.org", "Hi"))
            .await
            .expect_err("no credentials");
        assert!(matches!(err, AppError::Internal(_)));
    }
}
