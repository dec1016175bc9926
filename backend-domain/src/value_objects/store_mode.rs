// Store mode value object
// Fixed at startup: either a backing store is configured or every read degrades

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreMode {
    Configured,
    Degraded,
}

impl StoreMode {
    pub fn is_configured(&self) -> bool {
        matches!(self, StoreMode::Configured)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreMode::Configured => "configured",
            StoreMode::Degraded => "degraded",
        }
    }
}
