use backend_domain::{Listing, Player};

use crate::queries::fallback::resolve_listing;
use crate::AppState;

pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// Top players by coins. `limit` is clamped to `1..=MAX_LEADERBOARD_LIMIT`.
pub async fn top_players(state: &AppState, limit: Option<usize>) -> Listing<Player> {
    let limit = limit
        .unwrap_or(state.config.leaderboard_limit)
        .clamp(1, MAX_LEADERBOARD_LIMIT);
    let result = state.players.list_players(limit).await;
    resolve_listing(state, "players", result, |demo| {
        demo.players.iter().take(limit).cloned().collect()
    })
}
