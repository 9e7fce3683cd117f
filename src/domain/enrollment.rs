//! Enrollment domain entities and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_COURSE_MODE;

/// Enrollment tier offered by a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMode {
    /// Unique within a course, e.g. "honor" or "verified"
    pub slug: String,
    pub name: String,
    pub min_price: i64,
    /// Comma separated list of suggested prices
    #[serde(default)]
    pub suggested_prices: String,
    pub currency: String,
    #[serde(default)]
    pub expiration_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    /// Commerce identifier
    #[serde(default)]
    pub sku: Option<String>,
}

impl CourseMode {
    /// Create a free mode priced in USD
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            min_price: 0,
            suggested_prices: String::new(),
            currency: "usd".to_string(),
            expiration_datetime: None,
            description: None,
            sku: None,
        }
    }

    /// Set the minimum price
    pub fn with_min_price(mut self, min_price: i64) -> Self {
        self.min_price = min_price;
        self
    }

    /// Attach a commerce SKU
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Modes with a SKU are sold through commerce checkout
    pub fn has_sku(&self) -> bool {
        self.sku.is_some()
    }
}

/// Course level enrollment information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEnrollmentInfo {
    pub course_id: String,
    #[serde(default)]
    pub enrollment_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub enrollment_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub course_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub course_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub course_modes: Vec<CourseMode>,
    #[serde(default)]
    pub invite_only: bool,
}

impl CourseEnrollmentInfo {
    /// Create info for an open course with no modes and no dates
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            enrollment_start: None,
            enrollment_end: None,
            course_start: None,
            course_end: None,
            course_modes: Vec::new(),
            invite_only: false,
        }
    }

    /// Append a course mode
    pub fn with_mode(mut self, mode: CourseMode) -> Self {
        self.course_modes.push(mode);
        self
    }

    /// Slugs of the configured modes, in order
    pub fn mode_slugs(&self) -> Vec<&str> {
        self.course_modes.iter().map(|m| m.slug.as_str()).collect()
    }

    /// Find a configured mode by slug
    pub fn mode(&self, slug: &str) -> Option<&CourseMode> {
        self.course_modes.iter().find(|m| m.slug == slug)
    }
}

/// A user's enrollment in a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub created: DateTime<Utc>,
    pub mode: String,
    pub is_active: bool,
    /// Username of the enrolled user
    pub user: String,
    pub course: CourseEnrollmentInfo,
}

/// Enrollment creation request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddEnrollment {
    pub user: String,
    pub course_id: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_mode() -> String {
    DEFAULT_COURSE_MODE.to_string()
}

fn default_active() -> bool {
    true
}

impl AddEnrollment {
    /// Active enrollment in the default mode
    pub fn new(user: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            course_id: course_id.into(),
            mode: default_mode(),
            is_active: default_active(),
        }
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mode_slugs_keep_order() {
        let info = CourseEnrollmentInfo::new("edX/DemoX/2014T2")
            .with_mode(CourseMode::new("honor", "Honor Code Certificate"))
            .with_mode(CourseMode::new("verified", "Verified Certificate").with_min_price(50));

        assert_eq!(info.mode_slugs(), vec!["honor", "verified"]);
        assert_eq!(info.mode("verified").unwrap().min_price, 50);
        assert!(info.mode("audit").is_none());
    }

    #[test]
    fn test_sku_marks_commerce_modes() {
        assert!(!CourseMode::new("honor", "Honor").has_sku());
        assert!(CourseMode::new("verified", "Verified").with_sku("ABCD123").has_sku());
    }

    #[test]
    fn test_course_info_json_shape() {
        let mut info = CourseEnrollmentInfo::new("edX/DemoX/2014T2")
            .with_mode(CourseMode::new("honor", "Honor Code Certificate"));
        info.course_start = Some(Utc.with_ymd_and_hms(2015, 2, 3, 0, 0, 0).unwrap());

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["course_start"], "2015-02-03T00:00:00Z");
        assert_eq!(json["enrollment_end"], serde_json::Value::Null);
        assert_eq!(json["invite_only"], false);
        assert_eq!(json["course_modes"][0]["slug"], "honor");
        assert_eq!(json["course_modes"][0]["currency"], "usd");
        assert_eq!(json["course_modes"][0]["sku"], serde_json::Value::Null);
    }

    #[test]
    fn test_add_enrollment_defaults() {
        let request: AddEnrollment =
            serde_json::from_str(r#"{"user": "Bob", "course_id": "edX/DemoX/2014T2"}"#).unwrap();
        assert_eq!(request, AddEnrollment::new("Bob", "edX/DemoX/2014T2"));
        assert_eq!(request.mode, "honor");
        assert!(request.is_active);
    }
}
