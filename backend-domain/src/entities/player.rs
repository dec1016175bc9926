// Player entity
// A game account, created by the game server on first join. Read-only here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_id, deserialize_null_default, deserialize_optional_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub coins: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub quests_completed: u32,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rank: String,
}
