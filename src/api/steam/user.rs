//! ISteamUser endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::validation::{self, MAX_STEAM_IDS};
use crate::api::middleware::CallerKey;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};
use crate::domain::steam::{FriendList, PlayerBansResponse, PlayerSummaries, VanityResolution};
use crate::domain::VanityUrlType;
use crate::infrastructure::steam::Relationship;

#[derive(Debug, Deserialize)]
pub struct SteamIdsParams {
    #[serde(alias = "steamIds", alias = "steam_ids")]
    pub steamids: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FriendListParams {
    pub relationship: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    /// Token or full profile URL; used when the path carries none
    #[serde(alias = "vanityUrl", alias = "vanity_url")]
    pub vanityurl: Option<String>,
    #[serde(alias = "urlType")]
    pub url_type: Option<i64>,
}

/// GET /api/steamuser/summaries?steamids=...
pub async fn get_player_summaries(
    State(state): State<AppState>,
    caller: CallerKey,
    Query(params): Query<SteamIdsParams>,
) -> Result<Json<PlayerSummaries>, ApiError> {
    let steam_ids = validation::steam_ids(params.steamids.as_deref(), Some(MAX_STEAM_IDS))?;

    info!(count = steam_ids.len(), api_key = %caller.label(), "Getting player summaries");

    let summaries = state.steam_client.get_player_summaries(&steam_ids).await?;
    Ok(Json(summaries))
}

/// GET /api/steamuser/friends/{steam_id}?relationship=all|friend
pub async fn get_friend_list(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(steam_id): Path<String>,
    Query(params): Query<FriendListParams>,
) -> Result<Json<FriendList>, ApiError> {
    let steam_id = validation::steam_id(&steam_id)?;
    let relationship = match params.relationship.as_deref() {
        None | Some("") => Relationship::default(),
        Some(value) => value.parse::<Relationship>()?,
    };

    info!(
        steam_id,
        relationship = relationship.as_str(),
        api_key = %caller.label(),
        "Getting friend list"
    );

    let friends = state
        .steam_client
        .get_friend_list(steam_id, relationship)
        .await?;
    Ok(Json(friends))
}

/// GET /api/steamuser/bans?steamids=...
pub async fn get_player_bans(
    State(state): State<AppState>,
    caller: CallerKey,
    Query(params): Query<SteamIdsParams>,
) -> Result<Json<PlayerBansResponse>, ApiError> {
    let steam_ids = validation::steam_ids(params.steamids.as_deref(), None)?;

    info!(count = steam_ids.len(), api_key = %caller.label(), "Getting player bans");

    let bans = state.steam_client.get_player_bans(&steam_ids).await?;
    Ok(Json(bans))
}

/// GET /api/steamuser/groups/{steam_id}
pub async fn get_user_group_list(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(steam_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let steam_id = validation::steam_id(&steam_id)?;

    info!(steam_id, api_key = %caller.label(), "Getting group list");

    let groups = state.steam_client.get_user_group_list(steam_id).await?;
    Ok(Json(groups))
}

/// GET /api/steamuser/resolve/{vanity}?url_type=1|2
pub async fn resolve_vanity_url(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(vanity): Path<String>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<VanityResolution>, ApiError> {
    resolve(state, caller, &vanity, params.url_type).await
}

/// GET /api/steamuser/resolve?vanityurl=...&url_type=1|2
///
/// Accepts full profile URLs, which cannot travel in a path segment.
pub async fn resolve_vanity_url_query(
    State(state): State<AppState>,
    caller: CallerKey,
    Query(params): Query<ResolveParams>,
) -> Result<Json<VanityResolution>, ApiError> {
    let input = params.vanityurl.unwrap_or_default();
    resolve(state, caller, &input, params.url_type).await
}

async fn resolve(
    state: AppState,
    caller: CallerKey,
    input: &str,
    url_type: Option<i64>,
) -> Result<Json<VanityResolution>, ApiError> {
    if input.trim().is_empty() {
        return Err(ApiError::bad_request("Vanity URL is required"));
    }

    let url_type = url_type
        .map(VanityUrlType::try_from)
        .transpose()?
        .unwrap_or_default();

    info!(
        vanity = %input,
        url_type = url_type.code(),
        api_key = %caller.label(),
        "Resolving vanity URL"
    );

    let resolution = state
        .steam_client
        .resolve_vanity_url(input, url_type)
        .await?;
    Ok(Json(resolution))
}
