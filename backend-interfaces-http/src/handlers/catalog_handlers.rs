use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use backend_application::dtos::StatsResponse;
use backend_application::queries::{
    catalog_queries, leaderboard_queries, showcase_queries,
};
use backend_application::AppState;
use backend_domain::{DonationPackage, GameEvent, Listing, Player, TeamMember};

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

pub async fn list_packages(State(state): State<AppState>) -> Json<Listing<DonationPackage>> {
    Json(catalog_queries::list_packages(&state).await)
}

pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<Listing<Player>> {
    Json(leaderboard_queries::top_players(&state, query.limit).await)
}

pub async fn server_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(showcase_queries::server_stats(&state).await)
}

pub async fn list_events(State(state): State<AppState>) -> Json<Listing<GameEvent>> {
    Json(showcase_queries::list_events(&state).await)
}

pub async fn list_team(State(state): State<AppState>) -> Json<Listing<TeamMember>> {
    Json(showcase_queries::list_team(&state).await)
}
