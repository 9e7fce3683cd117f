//! Course about serialization.
//!
//! Flattens a course descriptor and its about sections into a single
//! JSON-friendly record.

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{
    ASSET_KEY_C4X_TAG, ASSET_KEY_V1_PREFIX, COURSE_KEY_V1_PREFIX, DEFAULT_API_DATE_FORMAT,
};
use crate::errors::EnrollmentError;

/// About sections keyed by section name (e.g. "overview", "effort")
pub type AboutInfo = HashMap<String, String>;

/// Course identifier in either `org/course/run` or `course-v1:org+course+run` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseKey {
    pub org: String,
    pub course: String,
    pub run: String,
    /// Old slash separated form
    pub deprecated: bool,
}

impl CourseKey {
    /// Parse a course key string.
    pub fn parse(key: &str) -> Result<Self, EnrollmentError> {
        let (parts, deprecated): (Vec<&str>, bool) = match key.strip_prefix(COURSE_KEY_V1_PREFIX) {
            Some(rest) => (rest.split('+').collect(), false),
            None => (key.split('/').collect(), true),
        };

        match parts.as_slice() {
            [org, course, run] if !org.is_empty() && !course.is_empty() && !run.is_empty() => {
                Ok(Self {
                    org: org.to_string(),
                    course: course.to_string(),
                    run: run.to_string(),
                    deprecated,
                })
            }
            _ => Err(EnrollmentError::InvalidCourseKey(key.to_string())),
        }
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deprecated {
            write!(f, "{}/{}/{}", self.org, self.course, self.run)
        } else {
            write!(
                f,
                "{}{}+{}+{}",
                COURSE_KEY_V1_PREFIX, self.org, self.course, self.run
            )
        }
    }
}

impl FromStr for CourseKey {
    type Err = EnrollmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CourseKey {
    type Error = EnrollmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CourseKey> for String {
    fn from(key: CourseKey) -> Self {
        key.to_string()
    }
}

/// Course attributes used by the about serializer
#[derive(Debug, Clone, Deserialize)]
pub struct CourseDescriptor {
    pub id: CourseKey,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub advertised_start: Option<String>,
    #[serde(default)]
    pub is_new: Option<bool>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub announcement: Option<DateTime<Utc>>,
    /// Static asset file name of the course image
    #[serde(default)]
    pub course_image: Option<String>,
}

impl CourseDescriptor {
    pub fn new(id: CourseKey) -> Self {
        Self {
            id,
            display_name: None,
            advertised_start: None,
            is_new: None,
            start: None,
            end: None,
            announcement: None,
            course_image: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_image: Option<String>,
}

/// Serialized course about record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseAbout {
    pub media: CourseMedia,
    pub display_name: Option<String>,
    pub course_number: String,
    pub course_id: String,
    pub advertised_start: Option<String>,
    pub is_new: Option<bool>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub announcement: Option<String>,
    pub effort: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub key_dates: Option<String>,
    pub video: Option<String>,
    pub course_staff_short: Option<String>,
    pub course_staff_extended: Option<String>,
    pub requirements: Option<String>,
    pub syllabus: Option<String>,
    pub textbook: Option<String>,
    pub faq: Option<String>,
    pub more_info: Option<String>,
    pub number: Option<String>,
    pub instructors: Option<String>,
    pub overview: Option<String>,
    pub end_date: Option<String>,
    pub prerequisites: Option<String>,
    pub ocw_links: Option<String>,
}

/// Serialize a course and its about sections.
///
/// Dates are rendered with `date_format` (a `strftime` pattern).
pub fn serialize_content(
    course: &CourseDescriptor,
    about: &AboutInfo,
    date_format: &str,
) -> CourseAbout {
    let section = |name: &str| about.get(name).cloned();

    CourseAbout {
        media: CourseMedia {
            course_image: course
                .course_image
                .as_deref()
                .filter(|image| !image.is_empty())
                .map(|_| course_image_url(course)),
        },
        display_name: course.display_name.clone(),
        course_number: course.id.course.clone(),
        course_id: course.id.to_string(),
        advertised_start: course.advertised_start.clone(),
        is_new: course.is_new,
        start: course.start.map(|d| format_date(d, date_format)),
        end: course.end.map(|d| format_date(d, date_format)),
        announcement: course.announcement.map(|d| format_date(d, date_format)),
        effort: section("effort"),
        short_description: section("short_description"),
        description: section("description"),
        key_dates: section("key_dates"),
        video: section("video"),
        course_staff_short: section("course_staff_short"),
        course_staff_extended: section("course_staff_extended"),
        requirements: section("requirements"),
        syllabus: section("syllabus"),
        textbook: section("textbook"),
        faq: section("faq"),
        more_info: section("more_info"),
        number: section("number"),
        instructors: section("instructors"),
        overview: section("overview"),
        end_date: section("end_date"),
        prerequisites: section("prerequisites"),
        ocw_links: section("ocw_links"),
    }
}

/// URL of the course image static asset.
pub fn course_image_url(course: &CourseDescriptor) -> String {
    let name = course
        .course_image
        .as_deref()
        .unwrap_or_default()
        .replace('/', "_");
    let key = &course.id;

    if key.deprecated {
        format!(
            "/{}/{}/{}/asset/{}",
            ASSET_KEY_C4X_TAG, key.org, key.course, name
        )
    } else {
        format!(
            "/{}{}+{}+{}+type@asset+block@{}",
            ASSET_KEY_V1_PREFIX, key.org, key.course, key.run, name
        )
    }
}

/// Format a date, falling back to the default format when the pattern is invalid.
fn format_date(date: DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_ok() {
        return out;
    }

    tracing::warn!(format = %date_format, "Invalid date format, using default");
    date.format(DEFAULT_API_DATE_FORMAT).to_string()
}
