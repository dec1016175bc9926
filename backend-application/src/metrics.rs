use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    donation_requests: AtomicU64,
    donations_granted: AtomicU64,
    donations_rejected: AtomicU64,
    remote_command_failures: AtomicU64,
    audit_write_failures: AtomicU64,
    feedback_accepted: AtomicU64,
    feedback_rejected: AtomicU64,
}

impl Metrics {
    pub fn record_donation_request(&self) {
        self.donation_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_donation_granted(&self) {
        self.donations_granted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_donation_rejected(&self) {
        self.donations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_failure(&self) {
        self.remote_command_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_audit_failure(&self) {
        self.audit_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_feedback(&self, accepted: bool) {
        if accepted {
            self.feedback_accepted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.feedback_rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn donations_granted(&self) -> u64 {
        self.donations_granted.load(Ordering::Relaxed)
    }

    pub fn remote_command_failures(&self) -> u64 {
        self.remote_command_failures.load(Ordering::Relaxed)
    }

    pub fn audit_write_failures(&self) -> u64 {
        self.audit_write_failures.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.donation_requests.load(Ordering::Relaxed);
        let granted = self.donations_granted.load(Ordering::Relaxed);
        let rejected = self.donations_rejected.load(Ordering::Relaxed);
        let remote_failures = self.remote_command_failures.load(Ordering::Relaxed);
        let audit_failures = self.audit_write_failures.load(Ordering::Relaxed);
        let feedback_accepted = self.feedback_accepted.load(Ordering::Relaxed);
        let feedback_rejected = self.feedback_rejected.load(Ordering::Relaxed);

        format!(
            "# TYPE wintercraft_donation_requests_total counter\n\
wintercraft_donation_requests_total {}\n\
# TYPE wintercraft_donations_granted_total counter\n\
wintercraft_donations_granted_total {}\n\
# TYPE wintercraft_donations_rejected_total counter\n\
wintercraft_donations_rejected_total {}\n\
# TYPE wintercraft_remote_command_failures_total counter\n\
wintercraft_remote_command_failures_total {}\n\
# TYPE wintercraft_audit_write_failures_total counter\n\
wintercraft_audit_write_failures_total {}\n\
# TYPE wintercraft_feedback_total counter\n\
wintercraft_feedback_total{{result=\"accepted\"}} {}\n\
wintercraft_feedback_total{{result=\"rejected\"}} {}\n",
            requests,
            granted,
            rejected,
            remote_failures,
            audit_failures,
            feedback_accepted,
            feedback_rejected
        )
    }
}
