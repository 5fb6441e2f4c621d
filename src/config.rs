//! Client configuration.
//!
//! Everything is environment-driven (optionally via a `.env` file loaded in
//! `main`): `LUKMAN_API_URL`, `LUKMAN_TIMEOUT_SECS`, `LUKMAN_CACHE_TTL_SECS`,
//! `LUKMAN_CACHE_MAX_ENTRIES`. Unset or unparsable values fall back to the
//! compiled-in defaults.

use serde::{Deserialize, Serialize};

/// Default API base URL when `LUKMAN_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Per-request timeout. AI advice generation is slow, so this is generous.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response cache time-to-live (5 minutes).
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Response cache capacity bound.
const DEFAULT_CACHE_MAX_ENTRIES: usize = 100;

/// Response cache tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds after which a cached response is treated as stale.
    pub ttl_secs: u64,
    /// Maximum number of cached responses held at once.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

/// Top-level client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the advice API.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Response cache tuning.
    pub cache: CacheConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache: CacheConfig::default(),
        }
    }
}

impl Settings {
    /// Build settings from the process environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env_string("LUKMAN_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: env_parse("LUKMAN_TIMEOUT_SECS").unwrap_or(defaults.timeout_secs),
            cache: CacheConfig {
                ttl_secs: env_parse("LUKMAN_CACHE_TTL_SECS").unwrap_or(defaults.cache.ttl_secs),
                max_entries: env_parse("LUKMAN_CACHE_MAX_ENTRIES")
                    .unwrap_or(defaults.cache.max_entries),
            },
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
