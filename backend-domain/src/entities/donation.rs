// Donation entities
// Packages are immutable reference data; records are append-only audit rows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_id, deserialize_null_default, deserialize_optional_timestamp};
use crate::value_objects::Rank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationPackage {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    pub price: Decimal,
    pub rank: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image_url: String,
}

impl DonationPackage {
    /// `None` when the package points at a rank label outside the known tiers.
    pub fn target_rank(&self) -> Option<Rank> {
        self.rank.parse().ok()
    }
}

/// Audit row as inserted; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDonationRecord {
    pub username: String,
    pub package_id: String,
    pub price: Decimal,
}

impl NewDonationRecord {
    pub fn for_package(username: &str, package: &DonationPackage) -> Self {
        Self {
            username: username.to_string(),
            package_id: package.id.clone(),
            price: package.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub package_id: String,
    pub price: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}
