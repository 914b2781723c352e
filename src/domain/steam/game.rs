//! Game-facing upstream models (ISteamNews, ISteamUserStats, ISteamApps)

use serde::{Deserialize, Serialize};

use super::tolerant;

/// `{"appnews": {...}}` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppNewsEnvelope {
    #[serde(rename = "appnews")]
    pub app_news: AppNews,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppNews {
    #[serde(rename = "appid", deserialize_with = "tolerant::int_or_string")]
    pub app_id: u32,
    #[serde(rename = "newsitems")]
    pub news_items: Vec<NewsItem>,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub count: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub gid: String,
    pub title: String,
    pub url: String,
    #[serde(deserialize_with = "tolerant::flag")]
    pub is_external_url: bool,
    pub author: String,
    pub contents: String,
    #[serde(rename = "feedlabel")]
    pub feed_label: String,
    /// Unix timestamp
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub date: i64,
    #[serde(rename = "feedname")]
    pub feed_name: String,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub feed_type: i32,
    #[serde(rename = "appid", deserialize_with = "tolerant::int_or_string")]
    pub app_id: u32,
}

/// `{"achievementpercentages": {...}}` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementPercentagesEnvelope {
    #[serde(rename = "achievementpercentages")]
    pub achievement_percentages: AchievementPercentages,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementPercentages {
    pub achievements: Vec<AchievementPercentage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementPercentage {
    pub name: String,
    #[serde(deserialize_with = "tolerant::float_or_string")]
    pub percent: f64,
}

/// `{"playerstats": {...}}` envelope returned by GetPlayerAchievements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStatsEnvelope {
    #[serde(rename = "playerstats")]
    pub player_stats: PlayerStats,
}

/// Upstream sends `steamID` and `gameName` in camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "gamename")]
    pub game_name: String,
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "tolerant::flag")]
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    #[serde(rename = "apiname")]
    pub api_name: String,
    #[serde(deserialize_with = "tolerant::flag")]
    pub achieved: bool,
    /// Unix timestamp, zero while locked
    #[serde(rename = "unlocktime", deserialize_with = "tolerant::int_or_string")]
    pub unlock_time: i64,
    pub name: String,
    pub description: String,
}

/// GetNumberOfCurrentPlayers payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPlayers {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub player_count: i64,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub result: i32,
}

/// `{"applist": {...}}` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppListEnvelope {
    #[serde(rename = "applist")]
    pub app_list: AppList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppList {
    pub apps: Vec<SteamApp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamApp {
    #[serde(rename = "appid", deserialize_with = "tolerant::int_or_string")]
    pub app_id: u32,
    pub name: String,
}
