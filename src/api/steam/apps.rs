//! ISteamApps endpoint handlers

use axum::{extract::State, Json};
use tracing::info;

use crate::api::middleware::CallerKey;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::steam::AppList;

/// GET /api/steamapps/list
pub async fn get_app_list(
    State(state): State<AppState>,
    caller: CallerKey,
) -> Result<Json<AppList>, ApiError> {
    info!(api_key = %caller.label(), "Getting app list");

    let apps = state.steam_client.get_app_list().await?;
    Ok(Json(apps))
}
