// Test doubles for the store and the remote console

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use backend_domain::ports::{
    AuditRepository, CatalogRepository, PlayerRepository, RemoteConsole, RemoteError,
    ShowcaseRepository,
};
use backend_domain::{
    BestEffort, DemoCatalog, DonationPackage, DonationRecord, Feedback, GameEvent,
    NewDonationRecord, NewFeedback, Player, RemoteCommand, RuntimeConfig, ServerStats,
    StoreMode, TeamMember,
};
use rust_decimal::Decimal;

use crate::{AppState, GameConsole, Metrics};

pub fn player(username: &str, coins: u64, rank: &str) -> Player {
    Player {
        id: username.to_lowercase(),
        username: username.to_string(),
        coins,
        quests_completed: 0,
        last_login: None,
        rank: rank.to_string(),
    }
}

pub fn package(id: &str, name: &str, price: i64, rank: &str) -> DonationPackage {
    DonationPackage {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price: Decimal::from(price),
        rank: rank.to_string(),
        benefits: Vec::new(),
        image_url: String::new(),
    }
}

/// Store double. Each `fail_*` switch turns the matching calls into faults.
#[derive(Default)]
pub struct InMemoryStore {
    pub players: Mutex<Vec<Player>>,
    pub packages: Mutex<Vec<DonationPackage>>,
    pub events: Mutex<Vec<GameEvent>>,
    pub team: Mutex<Vec<TeamMember>>,
    pub stats: Mutex<Option<ServerStats>>,
    pub donations: Mutex<Vec<NewDonationRecord>>,
    pub feedback: Mutex<Vec<NewFeedback>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes_unavailable: AtomicBool,
    write_attempts: AtomicUsize,
}

impl InMemoryStore {
    pub fn with_players(self, players: Vec<Player>) -> Self {
        *lock(&self.players) = players;
        self
    }

    pub fn with_packages(self, packages: Vec<DonationPackage>) -> Self {
        *lock(&self.packages) = packages;
        self
    }

    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    pub fn recorded_donations(&self) -> Vec<NewDonationRecord> {
        lock(&self.donations).clone()
    }

    pub fn recorded_feedback(&self) -> Vec<NewFeedback> {
        lock(&self.feedback).clone()
    }

    fn check_read(&self) -> anyhow::Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(anyhow!("simulated store outage"));
        }
        Ok(())
    }

    fn write_gate<T>(&self) -> Option<BestEffort<T>> {
        if self.writes_unavailable.load(Ordering::SeqCst) {
            return Some(BestEffort::Unavailable);
        }
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Some(BestEffort::Failed("simulated insert failure".to_string()));
        }
        None
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl PlayerRepository for InMemoryStore {
    async fn find_player(&self, username: &str) -> anyhow::Result<Option<Player>> {
        self.check_read()?;
        Ok(lock(&self.players)
            .iter()
            .find(|player| player.username == username)
            .cloned())
    }

    async fn list_players(&self, limit: usize) -> anyhow::Result<Vec<Player>> {
        self.check_read()?;
        let mut players = lock(&self.players).clone();
        players.sort_by(|a, b| b.coins.cmp(&a.coins));
        players.truncate(limit);
        Ok(players)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.check_read()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn list_packages(&self) -> anyhow::Result<Vec<DonationPackage>> {
        self.check_read()?;
        let mut packages = lock(&self.packages).clone();
        packages.sort_by(|a, b| a.price.cmp(&b.price));
        Ok(packages)
    }
}

#[async_trait]
impl ShowcaseRepository for InMemoryStore {
    async fn server_stats(&self) -> anyhow::Result<Option<ServerStats>> {
        self.check_read()?;
        Ok(lock(&self.stats).clone())
    }

    async fn list_events(&self) -> anyhow::Result<Vec<GameEvent>> {
        self.check_read()?;
        Ok(lock(&self.events).clone())
    }

    async fn list_team_members(&self) -> anyhow::Result<Vec<TeamMember>> {
        self.check_read()?;
        Ok(lock(&self.team).clone())
    }
}

#[async_trait]
impl AuditRepository for InMemoryStore {
    async fn record_donation(&self, entry: &NewDonationRecord) -> BestEffort<DonationRecord> {
        if let Some(outcome) = self.write_gate() {
            return outcome;
        }
        let mut donations = lock(&self.donations);
        donations.push(entry.clone());
        BestEffort::Done(DonationRecord {
            id: donations.len().to_string(),
            username: entry.username.clone(),
            package_id: entry.package_id.clone(),
            price: entry.price,
            created_at: Some(chrono::Utc::now()),
        })
    }

    async fn submit_feedback(&self, entry: &NewFeedback) -> BestEffort<Feedback> {
        if let Some(outcome) = self.write_gate() {
            return outcome;
        }
        let mut feedback = lock(&self.feedback);
        feedback.push(entry.clone());
        BestEffort::Done(Feedback {
            id: feedback.len().to_string(),
            name: entry.name.clone(),
            email: entry.email.clone(),
            message: entry.message.clone(),
            created_at: Some(chrono::Utc::now()),
        })
    }
}

/// Console double that records every rendered command it receives.
#[derive(Default)]
pub struct RecordingConsole {
    sent: Mutex<Vec<String>>,
    calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl RecordingConsole {
    pub fn failing() -> Self {
        let console = Self::default();
        console.fail.store(true, Ordering::SeqCst);
        console
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<String> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl RemoteConsole for RecordingConsole {
    async fn send(&self, command: &RemoteCommand) -> Result<String, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RemoteError::Failed);
        }
        lock(&self.sent).push(command.to_wire());
        Ok(String::new())
    }

    async fn probe(&self) -> Result<(), RemoteError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RemoteError::Failed);
        }
        Ok(())
    }
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: Some("ops-token".to_string()),
        demo_fallback: false,
        leaderboard_limit: 10,
        max_body_bytes: 64 * 1024,
        request_timeout_seconds: 5,
    }
}

pub fn app_state(store: Arc<InMemoryStore>, console: Arc<RecordingConsole>) -> AppState {
    AppState {
        config: runtime_config(),
        store_mode: StoreMode::Configured,
        players: store.clone(),
        catalog: store.clone(),
        showcase: store.clone(),
        audit: store,
        console: GameConsole::new(console),
        demo: None,
        metrics: Arc::new(Metrics::default()),
    }
}

pub fn with_demo(mut state: AppState, demo: DemoCatalog) -> AppState {
    state.config.demo_fallback = true;
    state.demo = Some(Arc::new(demo.normalized()));
    state
}

/// The seeded store used across orchestrator tests.
pub fn seeded_store() -> InMemoryStore {
    InMemoryStore::default()
        .with_players(vec![
            player("Steve123", 1200, "player"),
            player("FrostyBuilder", 5400, "snow_vip"),
        ])
        .with_packages(vec![
            package("1", "Snow VIP", 3, "snow_vip"),
            package("2", "Reindeer Rank", 7, "reindeer"),
            package("3", "Santa+", 15, "santa_plus"),
        ])
}
