//! Player-facing upstream models (ISteamUser, IPlayerService)

use serde::{Deserialize, Serialize};

use super::tolerant;

/// Generic `{"response": {...}}` envelope used by most versioned methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamResponse<T: Default> {
    pub response: T,
}

/// Online status reported in `personastate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
}

impl From<i32> for PlayerStatus {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Away,
            4 => Self::Snooze,
            5 => Self::LookingToTrade,
            6 => Self::LookingToPlay,
            _ => Self::Offline,
        }
    }
}

/// GetPlayerSummaries payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSummaries {
    pub players: Vec<PlayerSummary>,
}

/// Basic profile information for one account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSummary {
    #[serde(rename = "steamid", deserialize_with = "tolerant::int_or_string")]
    pub steam_id: u64,
    #[serde(rename = "personaname")]
    pub persona_name: String,
    #[serde(rename = "profileurl")]
    pub profile_url: String,
    pub avatar: String,
    #[serde(rename = "avatarmedium")]
    pub avatar_medium: String,
    #[serde(rename = "avatarfull")]
    pub avatar_full: String,
    #[serde(rename = "personastate", deserialize_with = "tolerant::int_or_string")]
    pub persona_state: i32,
    #[serde(rename = "communityvisibilitystate", deserialize_with = "tolerant::int_or_string")]
    pub community_visibility_state: i32,
    #[serde(rename = "profilestate", deserialize_with = "tolerant::int_or_string")]
    pub profile_state: i32,
    #[serde(rename = "commentpermission", deserialize_with = "tolerant::int_or_string")]
    pub comment_permission: i32,
    #[serde(rename = "lastlogoff", deserialize_with = "tolerant::int_or_string")]
    pub last_logoff: u64,
    #[serde(rename = "timecreated", deserialize_with = "tolerant::int_or_string")]
    pub time_created: u64,
    #[serde(rename = "realname")]
    pub real_name: Option<String>,
    #[serde(rename = "primaryclanid")]
    pub primary_clan_id: Option<String>,
    #[serde(rename = "gameid")]
    pub game_id: Option<String>,
    #[serde(rename = "gameextrainfo")]
    pub game_extra_info: Option<String>,
    #[serde(rename = "gameserverip")]
    pub game_server_ip: Option<String>,
    #[serde(rename = "loccountrycode")]
    pub loc_country_code: Option<String>,
    #[serde(rename = "locstatecode")]
    pub loc_state_code: Option<String>,
    #[serde(rename = "loccityid", deserialize_with = "tolerant::int_or_string")]
    pub loc_city_id: i64,
}

impl PlayerSummary {
    pub fn status(&self) -> PlayerStatus {
        PlayerStatus::from(self.persona_state)
    }
}

/// `{"friendslist": {...}}` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendListEnvelope {
    #[serde(rename = "friendslist")]
    pub friends_list: FriendList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendList {
    pub friends: Vec<Friend>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Friend {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    pub relationship: String,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub friend_since: u64,
}

/// GetPlayerBans payload; not wrapped in `response`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerBansResponse {
    pub players: Vec<PlayerBans>,
}

/// Ban record. The upstream sends these keys in PascalCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerBans {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "communitybanned", deserialize_with = "tolerant::flag")]
    pub community_banned: bool,
    #[serde(rename = "vacbanned", deserialize_with = "tolerant::flag")]
    pub vac_banned: bool,
    #[serde(rename = "numberofvacbans", deserialize_with = "tolerant::int_or_string")]
    pub number_of_vac_bans: i32,
    #[serde(rename = "dayssincelastban", deserialize_with = "tolerant::int_or_string")]
    pub days_since_last_ban: i32,
    #[serde(rename = "numberofgamebans", deserialize_with = "tolerant::int_or_string")]
    pub number_of_game_bans: i32,
    #[serde(rename = "economyban")]
    pub economy_ban: String,
}

/// GetOwnedGames payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnedGames {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub game_count: i32,
    pub games: Vec<OwnedGame>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnedGame {
    #[serde(rename = "appid", deserialize_with = "tolerant::int_or_string")]
    pub app_id: u32,
    pub name: String,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub playtime_2weeks: i32,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub playtime_forever: i32,
    pub img_icon_url: String,
    pub img_logo_url: String,
    #[serde(deserialize_with = "tolerant::flag")]
    pub has_community_visible_stats: bool,
    #[serde(deserialize_with = "tolerant::flag")]
    pub has_leaderboards: bool,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub rtime_last_played: u64,
}

/// GetRecentlyPlayedGames payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentlyPlayedGames {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub total_count: i32,
    pub games: Vec<OwnedGame>,
}

/// GetSteamLevel payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamLevel {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub player_level: i32,
}

/// ResolveVanityURL payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VanityResolution {
    #[serde(rename = "steamid")]
    pub steam_id: Option<String>,
    /// 1 on success, 42 when no match was found
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub success: i32,
    pub message: Option<String>,
}

impl VanityResolution {
    pub fn is_resolved(&self) -> bool {
        self.success == 1 && self.steam_id.is_some()
    }
}
