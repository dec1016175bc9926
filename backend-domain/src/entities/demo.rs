// Demo catalog
// Placeholder content served to the site while the store is empty or unreachable

use serde::Deserialize;

use crate::entities::{DonationPackage, GameEvent, Player, ServerStats, TeamMember};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoCatalog {
    pub players: Vec<Player>,
    pub packages: Vec<DonationPackage>,
    pub events: Vec<GameEvent>,
    pub team: Vec<TeamMember>,
    pub stats: ServerStats,
}

impl DemoCatalog {
    /// Applies the orderings the store would apply to the same reads.
    pub fn normalized(mut self) -> Self {
        self.players.sort_by(|a, b| b.coins.cmp(&a.coins));
        self.packages.sort_by(|a, b| a.price.cmp(&b.price));
        self.events.sort_by(|a, b| a.date.cmp(&b.date));
        self
    }
}
