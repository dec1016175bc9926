use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{RconConfig, RuntimeConfig, StoreConfig};

use crate::config::validation::is_http_url;

pub const CONFIG_ENV: &str = "WINTERCRAFT_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub store_url: Option<String>,
    pub store_anon_key: Option<String>,
    pub store_service_key: Option<String>,
    pub store_timeout_seconds: u64,
    pub rcon_enabled: bool,
    pub rcon_host: String,
    pub rcon_port: u16,
    pub rcon_password: String,
    pub rcon_timeout_seconds: u64,
    pub demo_fallback: bool,
    pub demo_catalog_path: Option<String>,
    pub leaderboard_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let rcon = RconConfig::default();
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            api_token: None,
            store_url: None,
            store_anon_key: None,
            store_service_key: None,
            store_timeout_seconds: 10,
            rcon_enabled: rcon.enabled,
            rcon_host: rcon.host,
            rcon_port: rcon.port,
            rcon_password: rcon.password,
            rcon_timeout_seconds: rcon.timeout_seconds,
            demo_fallback: true,
            demo_catalog_path: None,
            leaderboard_limit: 10,
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    /// Reads `path`, or the file named by `WINTERCRAFT_CONFIG`, or `./config.toml`.
    /// A missing file means defaults. Env overrides are applied on top.
    pub async fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_string(),
            None => env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string()),
        };
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)
                .map_err(|err| anyhow!("invalid config file {}: {}", path, err))?
        } else {
            warn!(path = %path, "config file not found, using defaults");
            AppConfig::default()
        };
        config.apply_env_overrides();
        if let Some(base) = file_path.parent() {
            config.resolve_paths(base);
        }
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.api_token = non_blank(self.api_token.take());
        self.store_anon_key = non_blank(self.store_anon_key.take());
        self.store_service_key = non_blank(self.store_service_key.take());
        self.demo_catalog_path = non_blank(self.demo_catalog_path.take());

        self.store_url = non_blank(self.store_url.take())
            .map(|url| url.trim().trim_end_matches('/').to_string());
        if let Some(url) = &self.store_url {
            if !is_http_url(url) {
                warn!(url = %url, "store_url is not an http(s) url, running without a store");
                self.store_url = None;
            }
        }

        if self.rcon_host.trim().is_empty() {
            self.rcon_host = RconConfig::default().host;
        } else {
            self.rcon_host = self.rcon_host.trim().to_string();
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        if let Some(path) = &self.demo_catalog_path {
            self.demo_catalog_path = Some(resolve_path(base, path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.rcon_port == 0 {
            return Err(anyhow!("rcon_port must be greater than 0"));
        }
        if self.request_timeout_seconds == 0
            || self.store_timeout_seconds == 0
            || self.rcon_timeout_seconds == 0
        {
            return Err(anyhow!("timeouts must be greater than 0"));
        }
        if self.leaderboard_limit == 0 {
            return Err(anyhow!("leaderboard_limit must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            demo_fallback: self.demo_fallback,
            leaderboard_limit: self.leaderboard_limit,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            url: self.store_url.clone(),
            anon_key: self.store_anon_key.clone(),
            service_key: self.store_service_key.clone(),
            timeout_seconds: self.store_timeout_seconds,
        }
    }

    pub fn to_rcon_config(&self) -> RconConfig {
        RconConfig {
            enabled: self.rcon_enabled,
            host: self.rcon_host.clone(),
            port: self.rcon_port,
            password: self.rcon_password.clone(),
            timeout_seconds: self.rcon_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("WINTERCRAFT_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("WINTERCRAFT_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("WINTERCRAFT_STORE_URL") {
            self.store_url = Some(value);
        }
        if let Ok(value) = env::var("WINTERCRAFT_STORE_ANON_KEY") {
            self.store_anon_key = Some(value);
        }
        if let Ok(value) = env::var("WINTERCRAFT_STORE_SERVICE_KEY") {
            self.store_service_key = Some(value);
        }
        if let Ok(value) = env::var("WINTERCRAFT_STORE_TIMEOUT_SECONDS") {
            self.store_timeout_seconds = value.parse().unwrap_or(self.store_timeout_seconds);
        }
        if let Ok(value) = env::var("WINTERCRAFT_RCON_ENABLED") {
            self.rcon_enabled = value.parse().unwrap_or(self.rcon_enabled);
        }
        if let Ok(value) = env::var("WINTERCRAFT_RCON_HOST") {
            self.rcon_host = value;
        }
        if let Ok(value) = env::var("WINTERCRAFT_RCON_PORT") {
            self.rcon_port = value.parse().unwrap_or(self.rcon_port);
        }
        if let Ok(value) = env::var("WINTERCRAFT_RCON_PASSWORD") {
            self.rcon_password = value;
        }
        if let Ok(value) = env::var("WINTERCRAFT_RCON_TIMEOUT_SECONDS") {
            self.rcon_timeout_seconds = value.parse().unwrap_or(self.rcon_timeout_seconds);
        }
        if let Ok(value) = env::var("WINTERCRAFT_DEMO_FALLBACK") {
            self.demo_fallback = value.parse().unwrap_or(self.demo_fallback);
        }
        if let Ok(value) = env::var("WINTERCRAFT_DEMO_CATALOG_PATH") {
            self.demo_catalog_path = Some(value);
        }
        if let Ok(value) = env::var("WINTERCRAFT_LEADERBOARD_LIMIT") {
            self.leaderboard_limit = value.parse().unwrap_or(self.leaderboard_limit);
        }
        if let Ok(value) = env::var("WINTERCRAFT_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("WINTERCRAFT_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::StoreMode;

    #[test]
    fn parses_toml_with_defaults_for_missing_keys() {
        let mut config: AppConfig = toml::from_str(
            r#"
            bind_addr = "0.0.0.0:8080"
            store_url = "https://example.supabase.co/"
            store_anon_key = "anon"
            rcon_password = "secret"
            "#,
        )
        .expect("parse config");
        config.normalize();
        config.validate().expect("valid config");

        assert_eq!(config.store_url.as_deref(), Some("https://example.supabase.co"));
        assert_eq!(config.rcon_port, 25575);
        assert_eq!(config.rcon_host, "localhost");
        assert_eq!(config.to_store_config().mode(), StoreMode::Configured);
        assert_eq!(config.to_rcon_config().address(), "localhost:25575");
    }

    #[test]
    fn non_http_store_url_degrades() {
        let mut config = AppConfig {
            store_url: Some("your_supabase_url".to_string()),
            store_anon_key: Some("anon".to_string()),
            ..AppConfig::default()
        };
        config.normalize();

        assert!(config.store_url.is_none());
        assert_eq!(config.to_store_config().mode(), StoreMode::Degraded);
    }

    #[test]
    fn blank_secrets_are_dropped() {
        let mut config = AppConfig {
            api_token: Some("   ".to_string()),
            store_service_key: Some(String::new()),
            rcon_host: " ".to_string(),
            ..AppConfig::default()
        };
        config.normalize();

        assert!(config.api_token.is_none());
        assert!(config.store_service_key.is_none());
        assert_eq!(config.rcon_host, "localhost");
    }

    #[test]
    fn rejects_bad_values() {
        let config = AppConfig {
            bind_addr: "not an addr".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            rcon_timeout_seconds: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_demo_path_resolves_against_config_dir() {
        let mut config = AppConfig {
            demo_catalog_path: Some("demo.yaml".to_string()),
            ..AppConfig::default()
        };
        config.resolve_paths(Path::new("/etc/wintercraft"));
        assert_eq!(
            config.demo_catalog_path.as_deref(),
            Some("/etc/wintercraft/demo.yaml")
        );
    }
}
