// Rank value object
// The closed set of permission tiers understood by the game server

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Player,
    SnowVip,
    Reindeer,
    SantaPlus,
}

impl Rank {
    pub const ALL: [Rank; 4] = [Rank::Player, Rank::SnowVip, Rank::Reindeer, Rank::SantaPlus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Player => "player",
            Rank::SnowVip => "snow_vip",
            Rank::Reindeer => "reindeer",
            Rank::SantaPlus => "santa_plus",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRank(pub String);

impl fmt::Display for UnknownRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rank '{}'", self.0)
    }
}

impl std::error::Error for UnknownRank {}

// Labels are matched exactly; the game server's group names are case-sensitive.
impl FromStr for Rank {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| UnknownRank(s.to_string()))
    }
}
