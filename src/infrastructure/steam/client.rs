//! Typed client for the Steam Web API and store surfaces

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info};

use super::{RequestTranslator, UpstreamTransport};
use crate::domain::steam::{
    decode, parse_raw, AchievementPercentages, AchievementPercentagesEnvelope, AppDetailsMap,
    AppList, AppListEnvelope, AppNews, AppNewsEnvelope, CurrentPlayers, FriendList,
    FriendListEnvelope, OwnedGames, PlayerBansResponse, PlayerStats, PlayerStatsEnvelope,
    PlayerSummaries, RecentlyPlayedGames, SteamLevel, SteamResponse, VanityResolution,
};
use crate::domain::{
    DomainError, FlatRequest, NormalizedRequest, UpstreamRequest, VanityToken, VanityUrlType,
};

/// Relationship filter for friend lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relationship {
    #[default]
    All,
    Friend,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Friend => "friend",
        }
    }
}

impl std::str::FromStr for Relationship {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "friend" => Ok(Self::Friend),
            _ => Err(DomainError::invalid_argument(
                "Relationship must be 'all' or 'friend'",
            )),
        }
    }
}

/// Options for GetOwnedGames
#[derive(Debug, Clone, Default)]
pub struct OwnedGamesQuery {
    pub include_app_info: bool,
    pub include_played_free_games: bool,
    pub app_ids_filter: Vec<u32>,
}

/// Options for GetNewsForApp
#[derive(Debug, Clone)]
pub struct NewsQuery {
    pub count: u32,
    /// Zero returns full contents
    pub max_length: u32,
    pub feeds: Option<String>,
    pub tags: Option<String>,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            count: 20,
            max_length: 0,
            feeds: None,
            tags: None,
        }
    }
}

/// One method per upstream operation, each translating, fetching and
/// decoding
#[derive(Debug, Clone)]
pub struct SteamClient {
    translator: RequestTranslator,
    transport: Arc<dyn UpstreamTransport>,
    enable_logging: bool,
}

impl SteamClient {
    pub fn new(translator: RequestTranslator, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self {
            translator,
            transport,
            enable_logging: false,
        }
    }

    /// Log every upstream call at info level
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }

    pub fn translator(&self) -> &RequestTranslator {
        &self.translator
    }

    /// Fetch and decode any upstream request
    pub async fn get<T: DeserializeOwned>(
        &self,
        request: impl Into<UpstreamRequest>,
    ) -> Result<T, DomainError> {
        let request = request.into();
        let body = self.fetch(&request).await?;

        decode(&body).map_err(|e| {
            error!(
                operation = %request.label(),
                body_len = e.body_len(),
                error = %e,
                "Failed to decode Steam API response"
            );
            DomainError::from(e)
        })
    }

    /// Fetch an upstream request and pass its body through untyped
    pub async fn get_raw(&self, request: impl Into<UpstreamRequest>) -> Result<Value, DomainError> {
        let request = request.into();
        let body = self.fetch(&request).await?;

        parse_raw(&body).map_err(|e| {
            error!(
                operation = %request.label(),
                body_len = e.body_len(),
                error = %e,
                "Failed to parse Steam API response"
            );
            DomainError::from(e)
        })
    }

    async fn fetch(&self, request: &UpstreamRequest) -> Result<String, DomainError> {
        let url = self.translator.build(request);

        if self.enable_logging {
            info!(url = %url.redacted(), "Making Steam API request");
        }

        let body = self.transport.get(&url).await.map_err(|e| {
            error!(
                operation = %request.label(),
                url = %url.redacted(),
                error = %e,
                "Steam API request failed"
            );
            e
        })?;

        if self.enable_logging {
            info!(
                operation = %request.label(),
                body_len = body.len(),
                "Steam API response received"
            );
        }

        Ok(body)
    }

    pub async fn get_player_summaries(
        &self,
        steam_ids: &[u64],
    ) -> Result<PlayerSummaries, DomainError> {
        let request = NormalizedRequest::new("ISteamUser", "GetPlayerSummaries", "v0002")
            .param("steamids", join_ids(steam_ids));

        let envelope: SteamResponse<PlayerSummaries> = self.get(request).await?;
        Ok(envelope.response)
    }

    pub async fn get_friend_list(
        &self,
        steam_id: u64,
        relationship: Relationship,
    ) -> Result<FriendList, DomainError> {
        let request = NormalizedRequest::new("ISteamUser", "GetFriendList", "v0001")
            .param("steamid", steam_id.to_string())
            .param("relationship", relationship.as_str());

        let envelope: FriendListEnvelope = self.get(request).await?;
        Ok(envelope.friends_list)
    }

    pub async fn get_player_bans(&self, steam_ids: &[u64]) -> Result<PlayerBansResponse, DomainError> {
        let request = NormalizedRequest::new("ISteamUser", "GetPlayerBans", "v1")
            .param("steamids", join_ids(steam_ids));

        self.get(request).await
    }

    pub async fn get_user_group_list(&self, steam_id: u64) -> Result<Value, DomainError> {
        let request = NormalizedRequest::new("ISteamUser", "GetUserGroupList", "v1")
            .param("steamid", steam_id.to_string());

        self.get_raw(request).await
    }

    /// Resolve a vanity name or profile URL to a Steam ID
    pub async fn resolve_vanity_url(
        &self,
        input: &str,
        url_type: VanityUrlType,
    ) -> Result<VanityResolution, DomainError> {
        let token = VanityToken::extract(input)?;

        let request = NormalizedRequest::new("ISteamUser", "ResolveVanityURL", "v0001")
            .param("vanityurl", token.into_inner())
            .param("url_type", url_type.code().to_string());

        let envelope: SteamResponse<VanityResolution> = self.get(request).await?;
        Ok(envelope.response)
    }

    pub async fn get_owned_games(
        &self,
        steam_id: u64,
        query: &OwnedGamesQuery,
    ) -> Result<OwnedGames, DomainError> {
        let filter = (!query.app_ids_filter.is_empty())
            .then(|| join_ids(&query.app_ids_filter));

        let request = NormalizedRequest::new("IPlayerService", "GetOwnedGames", "v0001")
            .param("steamid", steam_id.to_string())
            .param("include_appinfo", query.include_app_info.to_string())
            .param(
                "include_played_free_games",
                query.include_played_free_games.to_string(),
            )
            .param_opt("appids_filter", filter);

        let envelope: SteamResponse<OwnedGames> = self.get(request).await?;
        Ok(envelope.response)
    }

    pub async fn get_recently_played_games(
        &self,
        steam_id: u64,
        count: Option<u32>,
    ) -> Result<RecentlyPlayedGames, DomainError> {
        let request = NormalizedRequest::new("IPlayerService", "GetRecentlyPlayedGames", "v0001")
            .param("steamid", steam_id.to_string())
            .param_opt("count", count.map(|c| c.to_string()));

        let envelope: SteamResponse<RecentlyPlayedGames> = self.get(request).await?;
        Ok(envelope.response)
    }

    pub async fn get_steam_level(&self, steam_id: u64) -> Result<SteamLevel, DomainError> {
        let request = NormalizedRequest::new("IPlayerService", "GetSteamLevel", "v0001")
            .param("steamid", steam_id.to_string());

        let envelope: SteamResponse<SteamLevel> = self.get(request).await?;
        Ok(envelope.response)
    }

    pub async fn get_badges(&self, steam_id: u64) -> Result<Value, DomainError> {
        let request = NormalizedRequest::new("IPlayerService", "GetBadges", "v0001")
            .param("steamid", steam_id.to_string());

        self.get_raw(request).await
    }

    pub async fn get_news_for_app(
        &self,
        app_id: u32,
        query: &NewsQuery,
    ) -> Result<AppNews, DomainError> {
        let request = NormalizedRequest::new("ISteamNews", "GetNewsForApp", "v0002")
            .param("appid", app_id.to_string())
            .param("count", query.count.to_string())
            .param("maxlength", query.max_length.to_string())
            .param_opt("feeds", non_empty(&query.feeds))
            .param_opt("tags", non_empty(&query.tags));

        let envelope: AppNewsEnvelope = self.get(request).await?;
        Ok(envelope.app_news)
    }

    pub async fn get_global_achievement_percentages(
        &self,
        game_id: u32,
    ) -> Result<AchievementPercentages, DomainError> {
        let request = NormalizedRequest::new(
            "ISteamUserStats",
            "GetGlobalAchievementPercentagesForApp",
            "v0002",
        )
        .param("gameid", game_id.to_string());

        let envelope: AchievementPercentagesEnvelope = self.get(request).await?;
        Ok(envelope.achievement_percentages)
    }

    pub async fn get_player_achievements(
        &self,
        steam_id: u64,
        app_id: u32,
        language: Option<&str>,
    ) -> Result<PlayerStats, DomainError> {
        let request = NormalizedRequest::new("ISteamUserStats", "GetPlayerAchievements", "v0001")
            .param("steamid", steam_id.to_string())
            .param("appid", app_id.to_string())
            .param_opt("l", language.filter(|l| !l.is_empty()));

        let envelope: PlayerStatsEnvelope = self.get(request).await?;
        Ok(envelope.player_stats)
    }

    pub async fn get_number_of_current_players(
        &self,
        app_id: u32,
    ) -> Result<CurrentPlayers, DomainError> {
        let request =
            NormalizedRequest::new("ISteamUserStats", "GetNumberOfCurrentPlayers", "v0001")
                .param("appid", app_id.to_string());

        let envelope: SteamResponse<CurrentPlayers> = self.get(request).await?;
        Ok(envelope.response)
    }

    pub async fn get_app_list(&self) -> Result<AppList, DomainError> {
        let request = NormalizedRequest::new("ISteamApps", "GetAppList", "v0002");

        let envelope: AppListEnvelope = self.get(request).await?;
        Ok(envelope.app_list)
    }

    /// Store details keyed by app id
    pub async fn get_app_details(&self, app_ids: &[u32]) -> Result<AppDetailsMap, DomainError> {
        let request = FlatRequest::new("appdetails").param("appids", join_ids(app_ids));

        self.get(request).await
    }
}

fn join_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
