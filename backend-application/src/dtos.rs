// Request and response bodies for the HTTP boundary

use backend_domain::utils::deserialize_optional_id;
use backend_domain::{DataSource, ServerStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationRequest {
    #[serde(default)]
    pub username: Option<String>,
    /// Accepts either a string or a numeric package id.
    #[serde(default, rename = "packageId", deserialize_with = "deserialize_optional_id")]
    pub package_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiveItemRequest {
    pub username: String,
    pub item: String,
    #[serde(default)]
    pub amount: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleResponse {
    pub success: bool,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: ServerStats,
    pub source: DataSource,
}
