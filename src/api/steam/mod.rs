//! Steam API endpoints, mounted under `/api`

pub mod apps;
pub mod news;
pub mod player;
pub mod store;
pub mod user;
pub mod user_stats;
pub mod validation;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create the Steam router
pub fn create_steam_router() -> Router<AppState> {
    Router::new()
        // ISteamUser
        .route("/steamuser/summaries", get(user::get_player_summaries))
        .route("/steamuser/friends/{steam_id}", get(user::get_friend_list))
        .route("/steamuser/bans", get(user::get_player_bans))
        .route("/steamuser/groups/{steam_id}", get(user::get_user_group_list))
        .route("/steamuser/resolve", get(user::resolve_vanity_url_query))
        .route("/steamuser/resolve/{vanity}", get(user::resolve_vanity_url))
        // IPlayerService
        .route("/player/owned-games/{steam_id}", get(player::get_owned_games))
        .route(
            "/player/recent-games/{steam_id}",
            get(player::get_recently_played_games),
        )
        .route("/player/level/{steam_id}", get(player::get_steam_level))
        .route("/player/badges/{steam_id}", get(player::get_badges))
        // ISteamNews
        .route("/steamnews/app/{app_id}", get(news::get_news_for_app))
        // ISteamUserStats; both achievement routes share the `{id}` segment
        .route(
            "/steamuserstats/achievements/{id}/global",
            get(user_stats::get_global_achievement_percentages),
        )
        .route(
            "/steamuserstats/achievements/{id}/{app_id}",
            get(user_stats::get_player_achievements),
        )
        .route(
            "/steamuserstats/players/{id}/current",
            get(user_stats::get_number_of_current_players),
        )
        // ISteamApps
        .route("/steamapps/list", get(apps::get_app_list))
        // Store
        .route(
            "/steamstore/appdetails",
            get(store::get_app_details_multiple),
        )
        .route("/steamstore/appdetails/{app_id}", get(store::get_app_details))
}
