// Runtime configuration handed to the application and adapters

use std::fmt;

use crate::value_objects::StoreMode;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub demo_fallback: bool,
    pub leaderboard_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Clone)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_key: Option<String>,
    pub timeout_seconds: u64,
}

impl StoreConfig {
    pub fn mode(&self) -> StoreMode {
        if self.url.is_some() && self.read_key().is_some() {
            StoreMode::Configured
        } else {
            StoreMode::Degraded
        }
    }

    pub fn read_key(&self) -> Option<&str> {
        self.anon_key.as_deref().or(self.service_key.as_deref())
    }

    /// Donation audit rows are only written with the service key.
    pub fn donation_write_key(&self) -> Option<&str> {
        self.service_key.as_deref()
    }

    pub fn feedback_write_key(&self) -> Option<&str> {
        self.service_key.as_deref().or(self.anon_key.as_deref())
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("anon_key_set", &self.anon_key.is_some())
            .field("service_key_set", &self.service_key.is_some())
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Clone)]
pub struct RconConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub password: String,
    pub timeout_seconds: u64,
}

impl RconConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for RconConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "localhost".to_string(),
            port: 25575,
            password: String::new(),
            timeout_seconds: 5,
        }
    }
}

impl fmt::Debug for RconConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RconConfig")
            .field("enabled", &self.enabled)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password_set", &!self.password.is_empty())
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
