//! Store surface models (`appdetails`)
//!
//! The store keys its response by app id: `{"<appid>": {"success", "data"}}`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tolerant;

/// Full `appdetails` body keyed by app id
pub type AppDetailsMap = HashMap<String, StoreAppDetailsResponse>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreAppDetailsResponse {
    #[serde(deserialize_with = "tolerant::flag")]
    pub success: bool,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub data: Option<StoreAppDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreAppDetails {
    #[serde(rename = "type")]
    pub app_type: String,
    pub name: String,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub steam_appid: u32,
    /// Sent as a number for most apps and as a string for some
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub required_age: i32,
    #[serde(deserialize_with = "tolerant::flag")]
    pub is_free: bool,
    pub controller_support: Option<String>,
    pub dlc: Vec<u32>,
    pub detailed_description: Option<String>,
    pub about_the_game: Option<String>,
    pub short_description: Option<String>,
    pub supported_languages: Option<String>,
    pub reviews: Option<String>,
    pub header_image: Option<String>,
    pub capsule_image: Option<String>,
    #[serde(rename = "capsule_imagev5")]
    pub capsule_image_v5: Option<String>,
    pub website: Option<String>,
    /// `[]` when the app does not ship on this platform
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub pc_requirements: Option<StoreRequirements>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub mac_requirements: Option<StoreRequirements>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub linux_requirements: Option<StoreRequirements>,
    pub legal_notice: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub packages: Vec<u32>,
    pub package_groups: Vec<StorePackageGroup>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub platforms: Option<StorePlatforms>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub metacritic: Option<StoreMetacritic>,
    pub categories: Vec<StoreCategory>,
    pub genres: Vec<StoreGenre>,
    pub screenshots: Vec<StoreScreenshot>,
    pub movies: Vec<StoreMovie>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub recommendations: Option<StoreRecommendations>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub achievements: Option<StoreAchievements>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub release_date: Option<StoreReleaseDate>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub support_info: Option<StoreSupportInfo>,
    pub background: Option<String>,
    pub background_raw: Option<String>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub content_descriptors: Option<StoreContentDescriptors>,
    /// Rating boards keyed by name (`esrb`, `pegi`, ...); `[]` when absent
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub ratings: Option<HashMap<String, StoreRating>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreRequirements {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorePackageGroup {
    pub name: String,
    pub title: String,
    pub description: String,
    pub selection_text: String,
    pub save_text: String,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub display_type: i32,
    #[serde(deserialize_with = "tolerant::flag")]
    pub is_recurring_subscription: bool,
    pub subs: Vec<StoreSubscription>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSubscription {
    #[serde(rename = "packageid", deserialize_with = "tolerant::int_or_string")]
    pub package_id: u32,
    pub percent_savings_text: String,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub percent_savings: i32,
    pub option_text: String,
    pub option_description: String,
    #[serde(deserialize_with = "tolerant::flag")]
    pub can_get_free_license: bool,
    #[serde(deserialize_with = "tolerant::flag")]
    pub is_free_license: bool,
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub price_in_cents_with_discount: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorePlatforms {
    #[serde(deserialize_with = "tolerant::flag")]
    pub windows: bool,
    #[serde(deserialize_with = "tolerant::flag")]
    pub mac: bool,
    #[serde(deserialize_with = "tolerant::flag")]
    pub linux: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreMetacritic {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub score: i32,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreCategory {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub id: i32,
    pub description: String,
}

/// Genre ids arrive as strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreGenre {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreScreenshot {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub id: i32,
    pub path_thumbnail: String,
    pub path_full: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreMovie {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub id: u32,
    pub name: String,
    pub thumbnail: String,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub webm: Option<StoreMovieFormats>,
    #[serde(deserialize_with = "tolerant::object_or_empty")]
    pub mp4: Option<StoreMovieFormats>,
    #[serde(deserialize_with = "tolerant::flag")]
    pub highlight: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreMovieFormats {
    #[serde(rename = "480")]
    pub format_480: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreRecommendations {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub total: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreAchievements {
    #[serde(deserialize_with = "tolerant::int_or_string")]
    pub total: i32,
    pub highlighted: Vec<StoreAchievement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreAchievement {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreReleaseDate {
    #[serde(deserialize_with = "tolerant::flag")]
    pub coming_soon: bool,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSupportInfo {
    pub url: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreContentDescriptors {
    pub ids: Vec<i32>,
    pub notes: Option<String>,
}

/// Rating board entry; every value is a string on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreRating {
    pub rating_generated: Option<String>,
    pub rating: String,
    pub required_age: Option<String>,
    pub banned: Option<String>,
    pub use_age_gate: Option<String>,
    pub descriptors: Option<String>,
}
