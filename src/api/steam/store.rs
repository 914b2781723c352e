//! Store endpoint handlers

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
use crate::domain::steam::AppDetailsMap;

#[derive(Debug, Deserialize)]
pub struct AppDetailsParams {
    #[serde(alias = "appIds", alias = "app_ids")]
    pub appids: Option<String>,
}

/// GET /api/steamstore/appdetails/{app_id}
pub async fn get_app_details(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(app_id): Path<String>,
) -> Result<Json<AppDetailsMap>, ApiError> {
    let app_id = validation::app_id(&app_id, "App ID")?;

    info!(app_id, api_key = %caller.label(), "Getting store app details");

    let details = state.steam_client.get_app_details(&[app_id]).await?;
    Ok(Json(details))
}

/// GET /api/steamstore/appdetails?appids=...
pub async fn get_app_details_multiple(
    State(state): State<AppState>,
    caller: CallerKey,
    Query(params): Query<AppDetailsParams>,
) -> Result<Json<AppDetailsMap>, ApiError> {
    let app_ids = validation::app_ids(params.appids.as_deref())?;

    info!(count = app_ids.len(), api_key = %caller.label(), "Getting store app details");

    let details = state.steam_client.get_app_details(&app_ids).await?;
    Ok(Json(details))
}
