//! Enrollment commands - Read and write enrollments through the service layer.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::{print_json, read_json};
use crate::cli::args::{EnrollArgs, UpdateArgs};
use crate::config::{Settings, DEFAULT_DATA_API};
use crate::domain::{AddEnrollment, CourseEnrollmentInfo};
use crate::errors::{EnrollmentError, EnrollmentResult};
use crate::infra::{CacheStore, DataApiRegistry, InMemoryDataApi, MemoryCache, RedisCache};
use crate::services::{EnrollmentManager, EnrollmentService};

/// Seed data for the built-in data API
#[derive(Debug, Default, Deserialize)]
pub struct Fixtures {
    pub courses: Vec<CourseEnrollmentInfo>,
    #[serde(default)]
    pub enrollments: Vec<AddEnrollment>,
}

/// List a user's enrollments
pub async fn list(
    user: String,
    fixtures: Option<&Path>,
    settings: &Settings,
) -> EnrollmentResult<()> {
    let service = build_service(fixtures, settings).await?;
    print_json(&service.get_enrollments(&user).await?)
}

/// Show one enrollment
pub async fn get(
    user: String,
    course_id: String,
    fixtures: Option<&Path>,
    settings: &Settings,
) -> EnrollmentResult<()> {
    let service = build_service(fixtures, settings).await?;
    print_json(&service.get_enrollment(&user, &course_id).await?)
}

/// Enroll a user in a course
pub async fn enroll(
    args: EnrollArgs,
    fixtures: Option<&Path>,
    settings: &Settings,
) -> EnrollmentResult<()> {
    let service = build_service(fixtures, settings).await?;
    let request = AddEnrollment::new(args.user, args.course_id)
        .mode(args.mode)
        .is_active(!args.inactive);
    print_json(&service.add_enrollment(request).await?)
}

/// Change the mode or active flag of an enrollment
pub async fn update(
    args: UpdateArgs,
    fixtures: Option<&Path>,
    settings: &Settings,
) -> EnrollmentResult<()> {
    let service = build_service(fixtures, settings).await?;
    let enrollment = service
        .update_enrollment(&args.user, &args.course_id, args.mode, args.active)
        .await?;
    print_json(&enrollment)
}

/// Show a course's enrollment details
pub async fn details(
    course_id: String,
    fixtures: Option<&Path>,
    settings: &Settings,
) -> EnrollmentResult<()> {
    let service = build_service(fixtures, settings).await?;
    print_json(&service.get_course_enrollment_details(&course_id).await?)
}

async fn build_service(
    fixtures: Option<&Path>,
    settings: &Settings,
) -> EnrollmentResult<EnrollmentManager> {
    let fixtures = match fixtures {
        Some(path) => Some(read_json::<Fixtures>(path).await?),
        None => None,
    };

    let cache: Arc<dyn CacheStore> = match &settings.redis_url {
        Some(url) => Arc::new(RedisCache::connect(url).await.map_err(|e| {
            EnrollmentError::internal(format!("Failed to connect to Redis: {}", e))
        })?),
        None => Arc::new(MemoryCache::new()),
    };

    service_from_fixtures(fixtures, settings, cache)
}

/// Wire the data API and service, seeding the built-in data API if fixtures are given.
fn service_from_fixtures(
    fixtures: Option<Fixtures>,
    settings: &Settings,
    cache: Arc<dyn CacheStore>,
) -> EnrollmentResult<EnrollmentManager> {
    let mut registry = DataApiRegistry::builtin();

    if let Some(fixtures) = fixtures {
        tracing::info!(
            courses = fixtures.courses.len(),
            enrollments = fixtures.enrollments.len(),
            "Seeding built-in data API from fixtures"
        );
        let api = InMemoryDataApi::with_courses(fixtures.courses)
            .with_enrollments(fixtures.enrollments)?;
        registry.register(DEFAULT_DATA_API, Arc::new(api));
    }

    EnrollmentManager::from_settings(settings, &registry, cache)
}
