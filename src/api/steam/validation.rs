//! Request parameter validation shared by the Steam handlers

use crate::api::types::ApiError;

/// Upper bound on IDs accepted by batch lookups
pub const MAX_STEAM_IDS: usize = 100;

/// Parse a single numeric Steam ID
pub fn steam_id(raw: &str) -> Result<u64, ApiError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ApiError::bad_request("Steam ID is required"));
    }

    raw.parse::<u64>()
        .map_err(|_| ApiError::bad_request("Invalid Steam ID format"))
}

/// Parse a comma-separated list of Steam IDs, empty entries ignored
pub fn steam_ids(raw: Option<&str>, max: Option<usize>) -> Result<Vec<u64>, ApiError> {
    let raw = raw.unwrap_or_default();

    if raw.is_empty() {
        return Err(ApiError::bad_request("Steam IDs are required"));
    }

    let parts: Vec<&str> = raw.split(',').filter(|s| !s.trim().is_empty()).collect();

    if parts.is_empty() {
        return Err(ApiError::bad_request("At least one Steam ID is required"));
    }

    if let Some(max) = max {
        if parts.len() > max {
            return Err(ApiError::bad_request(format!(
                "Maximum of {} Steam IDs allowed per request",
                max
            )));
        }
    }

    parts
        .into_iter()
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| ApiError::bad_request(format!("Invalid Steam ID format: {}", part)))
        })
        .collect()
}

/// Parse a strictly positive app id
pub fn app_id(raw: &str, label: &str) -> Result<u32, ApiError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::bad_request(format!(
            "{} must be a positive integer",
            label
        ))),
    }
}

/// Parse a comma-separated list of positive app ids
pub fn app_ids(raw: Option<&str>) -> Result<Vec<u32>, ApiError> {
    let raw = raw.unwrap_or_default();

    if raw.trim().is_empty() {
        return Err(ApiError::bad_request("App IDs parameter is required"));
    }

    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|part| {
            app_id(part, "App ID")
                .map_err(|_| ApiError::bad_request(format!("Invalid App ID format: {}", part)))
        })
        .collect()
}

/// Check an optional count against an inclusive range
pub fn count_in_range(count: Option<i64>, min: i64, max: i64) -> Result<Option<u32>, ApiError> {
    match count {
        None => Ok(None),
        Some(c) if (min..=max).contains(&c) => Ok(Some(c as u32)),
        Some(_) => Err(ApiError::bad_request(format!(
            "Count must be between {} and {}",
            min, max
        ))),
    }
}
