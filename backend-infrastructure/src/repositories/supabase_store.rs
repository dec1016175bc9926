// Store gateway over the PostgREST interface of a Supabase project
// Without a usable url or key every read is empty and every write is Unavailable

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use backend_domain::ports::{AuditRepository, CatalogRepository, PlayerRepository, ShowcaseRepository};
use backend_domain::{
    BestEffort, DonationPackage, DonationRecord, Feedback, GameEvent, NewDonationRecord,
    NewFeedback, Player, ServerStats, StoreConfig, StoreMode, TeamMember,
};

const PLAYERS: &str = "players";
const PACKAGES: &str = "donation_packages";
const EVENTS: &str = "events";
const TEAM: &str = "team_members";
const STATS: &str = "server_stats";
const DONATIONS: &str = "donations";
const FEEDBACK: &str = "feedback";

pub struct SupabaseStore {
    client: Client,
    config: StoreConfig,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()
            .context("failed to build store http client")?;
        Ok(Self { client, config })
    }

    pub fn mode(&self) -> StoreMode {
        self.config.mode()
    }

    fn table_url(&self, table: &str) -> Option<String> {
        self.config
            .url
            .as_deref()
            .map(|base| format!("{}/rest/v1/{}", base, table))
    }

    fn authorized(&self, builder: RequestBuilder, key: &str) -> RequestBuilder {
        builder
            .header("apikey", key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", key))
    }

    /// `Ok(None)` in degraded mode; the caller maps that to an empty result.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Vec<T>>> {
        let (Some(url), Some(key)) = (self.table_url(table), self.config.read_key()) else {
            return Ok(None);
        };
        let response = self
            .authorized(self.client.get(url), key)
            .query(query)
            .send()
            .await
            .with_context(|| format!("select from {} failed", table))?;
        let rows = decode::<Vec<T>>(table, response).await?;
        Ok(Some(rows))
    }

    async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        Ok(self.select(table, query).await?.unwrap_or_default())
    }

    async fn insert<B, T>(&self, table: &str, key: Option<&str>, body: &B) -> BestEffort<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let (Some(url), Some(key)) = (self.table_url(table), key) else {
            debug!(table, "insert skipped, store write not configured");
            return BestEffort::Unavailable;
        };
        let sent = self
            .authorized(self.client.post(url), key)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await;
        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                warn!(table, error = %err, "insert request failed");
                return BestEffort::Failed(err.to_string());
            }
        };
        match decode::<Vec<T>>(table, response).await {
            Ok(rows) => match rows.into_iter().next() {
                Some(row) => BestEffort::Done(row),
                None => BestEffort::Failed(format!("insert into {} returned no row", table)),
            },
            Err(err) => {
                warn!(table, error = %err, "insert rejected");
                BestEffort::Failed(err.to_string())
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(table: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!("{} responded {}: {}", table, status, truncate(&body, 200)));
    }
    response
        .json::<T>()
        .await
        .with_context(|| format!("unexpected {} payload", table))
}

fn truncate(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

fn select_all() -> (&'static str, String) {
    ("select", "*".to_string())
}

#[async_trait]
impl PlayerRepository for SupabaseStore {
    async fn find_player(&self, username: &str) -> Result<Option<Player>> {
        let rows: Vec<Player> = self
            .select_all(
                PLAYERS,
                &[
                    select_all(),
                    ("username", format!("eq.{}", username)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn list_players(&self, limit: usize) -> Result<Vec<Player>> {
        self.select_all(
            PLAYERS,
            &[
                select_all(),
                ("order", "coins.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn ping(&self) -> Result<()> {
        let _: Vec<serde_json::Value> = self
            .select_all(PLAYERS, &[("select", "id".to_string()), ("limit", "1".to_string())])
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for SupabaseStore {
    async fn list_packages(&self) -> Result<Vec<DonationPackage>> {
        self.select_all(PACKAGES, &[select_all(), ("order", "price.asc".to_string())])
            .await
    }
}

#[async_trait]
impl ShowcaseRepository for SupabaseStore {
    async fn server_stats(&self) -> Result<Option<ServerStats>> {
        let rows: Vec<ServerStats> = self
            .select_all(STATS, &[select_all(), ("limit", "1".to_string())])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn list_events(&self) -> Result<Vec<GameEvent>> {
        self.select_all(EVENTS, &[select_all(), ("order", "date.asc".to_string())])
            .await
    }

    async fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        self.select_all(TEAM, &[select_all()]).await
    }
}

#[async_trait]
impl AuditRepository for SupabaseStore {
    async fn record_donation(&self, entry: &NewDonationRecord) -> BestEffort<DonationRecord> {
        self.insert(DONATIONS, self.config.donation_write_key(), entry)
            .await
    }

    async fn submit_feedback(&self, entry: &NewFeedback) -> BestEffort<Feedback> {
        self.insert(FEEDBACK, self.config.feedback_write_key(), entry)
            .await
    }
}
