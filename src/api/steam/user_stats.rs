//! ISteamUserStats endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::validation;
use crate::api::middleware::CallerKey;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};
use crate::domain::steam::{AchievementPercentages, CurrentPlayers, PlayerStats};

#[derive(Debug, Deserialize)]
pub struct AchievementParams {
    #[serde(alias = "language")]
    pub l: Option<String>,
}

/// GET /api/steamuserstats/achievements/{game_id}/global
pub async fn get_global_achievement_percentages(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(game_id): Path<String>,
) -> Result<Json<AchievementPercentages>, ApiError> {
    let game_id = validation::app_id(&game_id, "Game ID")?;

    info!(game_id, api_key = %caller.label(), "Getting global achievement percentages");

    let percentages = state
        .steam_client
        .get_global_achievement_percentages(game_id)
        .await?;
    Ok(Json(percentages))
}

/// GET /api/steamuserstats/players/{app_id}/current
pub async fn get_number_of_current_players(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(app_id): Path<String>,
) -> Result<Json<CurrentPlayers>, ApiError> {
    let app_id = validation::app_id(&app_id, "App ID")?;

    info!(app_id, api_key = %caller.label(), "Getting current player count");

    let players = state
        .steam_client
        .get_number_of_current_players(app_id)
        .await?;
    Ok(Json(players))
}

/// GET /api/steamuserstats/achievements/{steam_id}/{app_id}?l=...
pub async fn get_player_achievements(
    State(state): State<AppState>,
    caller: CallerKey,
    Path((steam_id, app_id)): Path<(String, String)>,
    Query(params): Query<AchievementParams>,
) -> Result<Json<PlayerStats>, ApiError> {
    let steam_id = validation::steam_id(&steam_id)?;
    let app_id = validation::app_id(&app_id, "App ID")?;

    info!(steam_id, app_id, api_key = %caller.label(), "Getting player achievements");

    let stats = state
        .steam_client
        .get_player_achievements(steam_id, app_id, params.l.as_deref())
        .await?;
    Ok(Json(stats))
}
