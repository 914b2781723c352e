//! ISteamNews endpoint handlers

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
use crate::domain::steam::AppNews;
use crate::infrastructure::steam::NewsQuery;

/// Upstream ceiling on news items per call
const MAX_NEWS_COUNT: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct NewsParams {
    pub count: Option<i64>,
    #[serde(alias = "maxLength", alias = "max_length")]
    pub maxlength: Option<i64>,
    pub feeds: Option<String>,
    pub tags: Option<String>,
}

/// GET /api/steamnews/app/{app_id}
pub async fn get_news_for_app(
    State(state): State<AppState>,
    caller: CallerKey,
    Path(app_id): Path<String>,
    Query(params): Query<NewsParams>,
) -> Result<Json<AppNews>, ApiError> {
    let app_id = validation::app_id(&app_id, "App ID")?;
    let count = validation::count_in_range(params.count, 1, MAX_NEWS_COUNT)?;

    let max_length = match params.maxlength {
        None => 0,
        Some(len) => u32::try_from(len)
            .map_err(|_| ApiError::bad_request("Max length must be 0 or greater"))?,
    };

    let defaults = NewsQuery::default();
    let query = NewsQuery {
        count: count.unwrap_or(defaults.count),
        max_length,
        feeds: params.feeds,
        tags: params.tags,
    };

    info!(app_id, count = query.count, api_key = %caller.label(), "Getting news for app");

    let news = state.steam_client.get_news_for_app(app_id, &query).await?;
    Ok(Json(news))
}
