// Feedback entity
// Contact form submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_id, deserialize_optional_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}
