use async_trait::async_trait;

use crate::entities::{
    DonationPackage,
    DonationRecord,
    Feedback,
    GameEvent,
    NewDonationRecord,
    NewFeedback,
    Player,
    ServerStats,
    TeamMember,
};
use crate::value_objects::BestEffort;

/// Lookups return `Ok(None)` or an empty list for missing data.
/// `Err` is reserved for transport and configuration faults.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn find_player(&self, username: &str) -> anyhow::Result<Option<Player>>;
    async fn list_players(&self, limit: usize) -> anyhow::Result<Vec<Player>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_packages(&self) -> anyhow::Result<Vec<DonationPackage>>;

    async fn find_package(&self, package_id: &str) -> anyhow::Result<Option<DonationPackage>> {
        let packages = self.list_packages().await?;
        Ok(packages.into_iter().find(|package| package.id == package_id))
    }
}

#[async_trait]
pub trait ShowcaseRepository: Send + Sync {
    async fn server_stats(&self) -> anyhow::Result<Option<ServerStats>>;
    async fn list_events(&self) -> anyhow::Result<Vec<GameEvent>>;
    async fn list_team_members(&self) -> anyhow::Result<Vec<TeamMember>>;
}

/// Append-only audit writes. Never fail the caller.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    async fn record_donation(&self, entry: &NewDonationRecord) -> BestEffort<DonationRecord>;
    async fn submit_feedback(&self, entry: &NewFeedback) -> BestEffort<Feedback>;
}
