//! Rate limiter implementation
//!
//! Provides sliding window rate limiting for API keys.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock, RwLockWriteGuard};

use crate::domain::api_key::RateLimitConfig;

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);
const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Window whose ceiling caused a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitType {
    PerMinute,
    PerHour,
}

impl std::fmt::Display for LimitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerMinute => write!(f, "per_minute"),
            Self::PerHour => write!(f, "per_hour"),
        }
    }
}

/// Result of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request recorded in both windows
    Admitted,
    /// Nothing was recorded
    Rejected(LimitType),
}

impl RateLimitDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }
}

/// Timestamps of admitted requests for one credential, oldest first
#[derive(Debug, Default)]
struct RateWindowState {
    minute: VecDeque<Instant>,
    hour: VecDeque<Instant>,
}

impl RateWindowState {
    fn prune(&mut self, now: Instant) {
        prune_window(&mut self.minute, now, MINUTE);
        prune_window(&mut self.hour, now, HOUR);
    }

    fn try_admit(&mut self, now: Instant, config: &RateLimitConfig) -> RateLimitDecision {
        self.prune(now);

        if self.minute.len() >= config.requests_per_minute as usize {
            return RateLimitDecision::Rejected(LimitType::PerMinute);
        }

        if self.hour.len() >= config.requests_per_hour as usize {
            return RateLimitDecision::Rejected(LimitType::PerHour);
        }

        self.minute.push_back(now);
        self.hour.push_back(now);

        RateLimitDecision::Admitted
    }

    fn is_empty(&self) -> bool {
        self.minute.is_empty() && self.hour.is_empty()
    }
}

/// Drop timestamps strictly older than `now - span`
fn prune_window(window: &mut VecDeque<Instant>, now: Instant, span: Duration) {
    let Some(cutoff) = now.checked_sub(span) else {
        return;
    };

    while window.front().is_some_and(|t| *t < cutoff) {
        window.pop_front();
    }
}

type WindowMap = HashMap<String, Arc<Mutex<RateWindowState>>>;

/// Per-credential sliding window rate limiter
///
/// Each credential owns its own window state behind a mutex, so concurrent
/// requests for different credentials never wait on each other. The map lock
/// is held shared while an entry is in use and exclusively only to insert new
/// credentials or to evict idle ones.
#[derive(Debug)]
pub struct SlidingWindowRateLimiter {
    config: RateLimitConfig,
    windows: RwLock<WindowMap>,
    cleanup_interval: Duration,
    last_cleanup: Mutex<Instant>,
}

impl SlidingWindowRateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_cleanup_interval(config, CLEANUP_INTERVAL)
    }

    pub fn with_cleanup_interval(config: RateLimitConfig, cleanup_interval: Duration) -> Self {
        Self {
            config,
            windows: RwLock::new(HashMap::new()),
            cleanup_interval,
            last_cleanup: Mutex::new(Instant::now()),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Check and record a request for `key` at the current instant
    pub async fn admit(&self, key: &str) -> RateLimitDecision {
        self.admit_at(key, Instant::now()).await
    }

    /// Check and record a request for `key` at `now`
    pub async fn admit_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        self.maybe_cleanup(now).await;

        {
            let windows = self.windows.read().await;
            if let Some(state) = windows.get(key) {
                return state.lock().await.try_admit(now, &self.config);
            }
        }

        let mut windows = self.windows.write().await;
        let state = windows
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(RateWindowState::default())))
            .clone();

        // Keep the entry pinned against eviction while it is in use
        let _pinned = RwLockWriteGuard::downgrade(windows);
        state.lock().await.try_admit(now, &self.config)
    }

    /// Number of credentials currently holding window state
    pub async fn tracked_keys(&self) -> usize {
        self.windows.read().await.len()
    }

    /// Prune every credential and drop those whose windows are both empty
    pub async fn sweep(&self, now: Instant) -> usize {
        let mut windows = self.windows.write().await;
        let before = windows.len();

        let mut idle = Vec::new();
        for (key, state) in windows.iter() {
            let mut state = state.lock().await;
            state.prune(now);
            if state.is_empty() {
                idle.push(key.clone());
            }
        }

        for key in idle {
            windows.remove(&key);
        }

        let evicted = before - windows.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = windows.len(), "Evicted idle rate limit windows");
        }

        evicted
    }

    async fn maybe_cleanup(&self, now: Instant) {
        let should_cleanup = {
            let mut last = self.last_cleanup.lock().await;
            if now.saturating_duration_since(*last) >= self.cleanup_interval {
                *last = now;
                true
            } else {
                false
            }
        };

        if should_cleanup {
            self.sweep(now).await;
        }
    }
}

impl Default for SlidingWindowRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
