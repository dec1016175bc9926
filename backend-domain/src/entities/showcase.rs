// Showcase entities
// Reference data rendered by the site: aggregate stats, events and staff

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_id, deserialize_null_default, deserialize_optional_timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStats {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub online_players: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_players: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_donations: Decimal,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub active_events: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rewards: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub role: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub social_links: BTreeMap<String, String>,
}
