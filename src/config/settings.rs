//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_API_DATE_FORMAT, DEFAULT_COURSE_DETAILS_CACHE_TIMEOUT_SECONDS, DEFAULT_DATA_API,
};

/// Application configuration
#[derive(Clone)]
pub struct Settings {
    /// Registry name of the enrollment data API
    pub data_api: String,
    /// TTL of cached course enrollment details, in seconds
    pub course_details_cache_timeout: u64,
    /// Redis URL; the in-process cache is used when unset
    pub redis_url: Option<String>,
    /// `strftime` format for course about dates
    pub date_format: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("data_api", &self.data_api)
            .field(
                "course_details_cache_timeout",
                &self.course_details_cache_timeout,
            )
            .field("redis_url", &self.redis_url.as_ref().map(|_| "[REDACTED]"))
            .field("date_format", &self.date_format)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_api: DEFAULT_DATA_API.to_string(),
            course_details_cache_timeout: DEFAULT_COURSE_DETAILS_CACHE_TIMEOUT_SECONDS,
            redis_url: None,
            date_format: DEFAULT_API_DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_api: env::var("ENROLLMENT_DATA_API")
                .unwrap_or_else(|_| DEFAULT_DATA_API.to_string()),
            course_details_cache_timeout: env::var("ENROLLMENT_COURSE_DETAILS_CACHE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COURSE_DETAILS_CACHE_TIMEOUT_SECONDS),
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            date_format: env::var("API_DATE_FORMAT")
                .unwrap_or_else(|_| DEFAULT_API_DATE_FORMAT.to_string()),
        }
    }

    /// Cache TTL for course enrollment details.
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.course_details_cache_timeout)
    }
}
