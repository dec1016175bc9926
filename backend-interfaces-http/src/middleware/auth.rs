use axum::http::HeaderMap;

use backend_domain::RuntimeConfig;

/// Open when no api token is configured.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

/// Closed when no api token is configured. Guards routes that reach the game server.
pub fn authorize_operator(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    config.api_token.is_some() && authorize(config, headers)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
