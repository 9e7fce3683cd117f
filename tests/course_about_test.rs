//! Course about serializer tests.

use chrono::{TimeZone, Utc};
use serde_json::json;

use enrollment::config::DEFAULT_API_DATE_FORMAT;
use enrollment::domain::{serialize_content, AboutInfo, CourseDescriptor, CourseKey};

fn demo_course() -> CourseDescriptor {
    let mut course = CourseDescriptor::new(CourseKey::parse("edX/DemoX/2014T2").unwrap());
    course.display_name = Some("Demo Course".to_string());
    course.start = Some(Utc.with_ymd_and_hms(2015, 2, 3, 0, 0, 0).unwrap());
    course
}

#[test]
fn test_start_date_and_empty_media() {
    let about = serialize_content(&demo_course(), &AboutInfo::new(), DEFAULT_API_DATE_FORMAT);
    let json = serde_json::to_value(&about).unwrap();

    assert_eq!(json["start"], "2015-02-03");
    assert_eq!(json["media"], json!({}));
    assert_eq!(json["end"], serde_json::Value::Null);
    assert_eq!(json["announcement"], serde_json::Value::Null);
}

#[test]
fn test_identity_fields() {
    let about = serialize_content(&demo_course(), &AboutInfo::new(), DEFAULT_API_DATE_FORMAT);

    assert_eq!(about.course_id, "edX/DemoX/2014T2");
    assert_eq!(about.course_number, "DemoX");
    assert_eq!(about.display_name.as_deref(), Some("Demo Course"));
}

#[test]
fn test_course_image_in_media() {
    let mut course = demo_course();
    course.course_image = Some("images_course_image.jpg".to_string());

    let about = serialize_content(&course, &AboutInfo::new(), DEFAULT_API_DATE_FORMAT);
    let json = serde_json::to_value(&about).unwrap();

    assert_eq!(
        json["media"],
        json!({"course_image": "/c4x/edX/DemoX/asset/images_course_image.jpg"})
    );
}

#[test]
fn test_empty_course_image_is_ignored() {
    let mut course = demo_course();
    course.course_image = Some(String::new());

    let about = serialize_content(&course, &AboutInfo::new(), DEFAULT_API_DATE_FORMAT);
    assert!(about.media.course_image.is_none());
}

#[test]
fn test_about_sections_copied() {
    let about_info: AboutInfo = [
        ("effort", "6 hours per week"),
        ("overview", "<p>Overview</p>"),
        ("ocw_links", "[]"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let about = serialize_content(&demo_course(), &about_info, DEFAULT_API_DATE_FORMAT);

    assert_eq!(about.effort.as_deref(), Some("6 hours per week"));
    assert_eq!(about.overview.as_deref(), Some("<p>Overview</p>"));
    assert_eq!(about.ocw_links.as_deref(), Some("[]"));
    assert!(about.syllabus.is_none());
}

#[test]
fn test_dates_use_configured_format() {
    let mut course = demo_course();
    course.end = Some(Utc.with_ymd_and_hms(2015, 5, 6, 0, 0, 0).unwrap());
    course.announcement = Some(Utc.with_ymd_and_hms(2014, 12, 1, 12, 0, 0).unwrap());

    let about = serialize_content(&course, &AboutInfo::new(), "%d %b %Y");

    assert_eq!(about.start.as_deref(), Some("03 Feb 2015"));
    assert_eq!(about.end.as_deref(), Some("06 May 2015"));
    assert_eq!(about.announcement.as_deref(), Some("01 Dec 2014"));
}

#[test]
fn test_descriptor_from_json() {
    let course: CourseDescriptor = serde_json::from_value(json!({
        "id": "course-v1:edX+DemoX+2014T2",
        "start": "2015-02-03T00:00:00Z",
        "course_image": "cover.png"
    }))
    .unwrap();

    let about = serialize_content(&course, &AboutInfo::new(), DEFAULT_API_DATE_FORMAT);

    assert_eq!(about.course_id, "course-v1:edX+DemoX+2014T2");
    assert_eq!(
        about.media.course_image.as_deref(),
        Some("/asset-v1:edX+DemoX+2014T2+type@asset+block@cover.png")
    );
}

#[test]
fn test_descriptor_with_bad_key_is_rejected() {
    let result: Result<CourseDescriptor, _> =
        serde_json::from_value(json!({"id": "not-a-course-key"}));
    assert!(result.is_err());
}
