use backend_domain::{DataSource, GameEvent, Listing, ServerStats, TeamMember};
use tracing::warn;

use crate::dtos::StatsResponse;
use crate::queries::fallback::resolve_listing;
use crate::AppState;

pub async fn list_events(state: &AppState) -> Listing<GameEvent> {
    let result = state.showcase.list_events().await;
    resolve_listing(state, "events", result, |demo| demo.events.clone())
}

pub async fn list_team(state: &AppState) -> Listing<TeamMember> {
    let result = state.showcase.list_team_members().await;
    resolve_listing(state, "team_members", result, |demo| demo.team.clone())
}

/// Aggregate stats. Falls back to demo figures, or zeros when the fallback is off.
pub async fn server_stats(state: &AppState) -> StatsResponse {
    let failed = match state.showcase.server_stats().await {
        Ok(Some(stats)) => {
            return StatsResponse {
                stats,
                source: DataSource::Store,
            }
        }
        Ok(None) => false,
        Err(err) => {
            warn!(resource = "server_stats", error = %err, "store read failed");
            true
        }
    };

    if let Some(demo) = state.demo.as_deref() {
        return StatsResponse {
            stats: demo.stats.clone(),
            source: DataSource::Demo,
        };
    }
    let source = if failed || !state.store_mode.is_configured() {
        DataSource::Unavailable
    } else {
        DataSource::Store
    };
    StatsResponse {
        stats: ServerStats::default(),
        source,
    }
}
