//! IPlayerService endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::validation;
use crate::api::middleware::CallerKey;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};
use crate::domain::steam::{OwnedGames, RecentlyPlayedGames, SteamLevel};
use crate::infrastructure::steam::OwnedGamesQuery;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwnedGamesParams {
    #[serde(alias = "includeAppInfo", alias = "include_app_info")]
    pub include_appinfo: bool,
    #[serde(alias = "includePlayedFreeGames")]
    pub include_played_free_games: bool,
    #[serde(alias = "appIdsFilter", alias = "app_ids_filter")]
    pub appids_filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecentGamesParams {
    pub count: Option<i64>,
}

/// GET /api/player/owned-games/{steam_id}
pub async fn get_owned_games(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(steam_id): Path<String>,
    Query(params): Query<OwnedGamesParams>,
) -> Result<Json<OwnedGames>, ApiError> {
    let steam_id = validation::steam_id(&steam_id)?;

    let app_ids_filter = match params.appids_filter.as_deref() {
        None | Some("") => Vec::new(),
        Some(raw) => validation::app_ids(Some(raw))?,
    };

    info!(
        steam_id,
        include_app_info = params.include_appinfo,
        api_key = %caller.label(),
        "Getting owned games"
    );

    let query = OwnedGamesQuery {
        include_app_info: params.include_appinfo,
        include_played_free_games: params.include_played_free_games,
        app_ids_filter,
    };

    let games = state.steam_client.get_owned_games(steam_id, &query).await?;
    Ok(Json(games))
}

/// GET /api/player/recent-games/{steam_id}?count=1..100
pub async fn get_recently_played_games(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(steam_id): Path<String>,
    Query(params): Query<RecentGamesParams>,
) -> Result<Json<RecentlyPlayedGames>, ApiError> {
    let steam_id = validation::steam_id(&steam_id)?;
    let count = validation::count_in_range(params.count, 1, 100)?;

    info!(steam_id, count, api_key = %caller.label(), "Getting recently played games");

    let games = state
        .steam_client
        .get_recently_played_games(steam_id, count)
        .await?;
    Ok(Json(games))
}

/// GET /api/player/level/{steam_id}
pub async fn get_steam_level(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(steam_id): Path<String>,
) -> Result<Json<SteamLevel>, ApiError> {
    let steam_id = validation::steam_id(&steam_id)?;

    info!(steam_id, api_key = %caller.label(), "Getting Steam level");

    let level = state.steam_client.get_steam_level(steam_id).await?;
    Ok(Json(level))
}

/// GET /api/player/badges/{steam_id}
pub async fn get_badges(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(steam_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let steam_id = validation::steam_id(&steam_id)?;

    info!(steam_id, api_key = %caller.label(), "Getting badges");

    let badges = state.steam_client.get_badges(steam_id).await?;
    Ok(Json(badges))
}
