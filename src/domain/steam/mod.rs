//! Steam domain
//!
//! Typed upstream payloads and the tolerant decoding rules they share.

mod game;
mod lenient;
mod normalizer;
mod player;
mod store;
pub mod tolerant;

pub use game::{
    Achievement, AchievementPercentage, AchievementPercentages, AchievementPercentagesEnvelope,
    AppList, AppListEnvelope, AppNews, AppNewsEnvelope, CurrentPlayers, NewsItem, PlayerStats,
    PlayerStatsEnvelope, SteamApp,
};
pub use normalizer::{decode, normalize, parse_raw, DecodeError};
pub use player::{
    Friend, FriendList, FriendListEnvelope, OwnedGame, OwnedGames, PlayerBans, PlayerBansResponse,
    PlayerStatus, PlayerSummaries, PlayerSummary, RecentlyPlayedGames, SteamLevel, SteamResponse,
    VanityResolution,
};
pub use store::{
    AppDetailsMap, StoreAchievement, StoreAchievements, StoreAppDetails, StoreAppDetailsResponse,
    StoreCategory, StoreContentDescriptors, StoreGenre, StoreMetacritic, StoreMovie,
    StoreMovieFormats, StorePackageGroup, StorePlatforms, StoreRating, StoreRecommendations,
    StoreReleaseDate, StoreRequirements, StoreScreenshot, StoreSubscription, StoreSupportInfo,
};
