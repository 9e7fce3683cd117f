//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Enrollment Data API
// =============================================================================

/// Name of the built-in data API used when none is configured
pub const DEFAULT_DATA_API: &str = "enrollment.data";

/// Mode assigned to new enrollments when none is requested
pub const DEFAULT_COURSE_MODE: &str = "honor";

/// Well-known course mode slugs
pub const MODE_HONOR: &str = "honor";
pub const MODE_AUDIT: &str = "audit";
pub const MODE_VERIFIED: &str = "verified";
pub const MODE_PROFESSIONAL: &str = "professional";

// =============================================================================
// Cache
// =============================================================================

/// Default TTL for cached course enrollment details, in seconds
pub const DEFAULT_COURSE_DETAILS_CACHE_TIMEOUT_SECONDS: u64 = 60;

/// Cache key prefix for course enrollment details
pub const CACHE_PREFIX_COURSE_DETAILS: &str = "enrollment.course.details.";

/// Longest key the memory cache accepts (memcached compatible)
pub const MAX_CACHE_KEY_LENGTH: usize = 250;

// =============================================================================
// Serialization
// =============================================================================

/// Default `strftime` format for dates in course about records
pub const DEFAULT_API_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Course Keys & Static Assets
// =============================================================================

/// Prefix of new-style course keys (`course-v1:org+course+run`)
pub const COURSE_KEY_V1_PREFIX: &str = "course-v1:";

/// Prefix of new-style asset paths
pub const ASSET_KEY_V1_PREFIX: &str = "asset-v1:";

/// Tag of old-style (`org/course/run`) asset paths
pub const ASSET_KEY_C4X_TAG: &str = "c4x";

/// Build the cache key under which a course's enrollment details are stored
pub fn course_details_cache_key(course_id: &str) -> String {
    format!("{}{}", CACHE_PREFIX_COURSE_DETAILS, course_id)
}
