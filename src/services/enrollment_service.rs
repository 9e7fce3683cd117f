//! Enrollment service - Handles enrollment-related business logic.
//!
//! Validates requested course modes, delegates persistence to the
//! configured data API and fronts course details with a cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{course_details_cache_key, Settings};
use crate::domain::{AddEnrollment, CourseEnrollmentInfo, Enrollment};
use crate::errors::{EnrollmentError, EnrollmentResult};
use crate::infra::{CacheResult, CacheStore, DataApiRegistry, EnrollmentDataApi};

const CACHE_WRITE_FAILED: &str =
    "An unexpected error occurred while retrieving course enrollment details.";

/// Enrollment service trait for dependency injection.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// All enrollments of a user
    async fn get_enrollments(&self, user: &str) -> EnrollmentResult<Vec<Enrollment>>;

    /// A user's enrollment in a course, if any
    async fn get_enrollment(
        &self,
        user: &str,
        course_id: &str,
    ) -> EnrollmentResult<Option<Enrollment>>;

    /// Enroll a user after checking the mode is offered by the course
    async fn add_enrollment(&self, request: AddEnrollment) -> EnrollmentResult<Enrollment>;

    /// Update an enrollment after checking the mode is offered by the course
    async fn update_enrollment(
        &self,
        user: &str,
        course_id: &str,
        mode: Option<String>,
        is_active: Option<bool>,
    ) -> EnrollmentResult<Enrollment>;

    /// Course enrollment details, served from cache when possible
    async fn get_course_enrollment_details(
        &self,
        course_id: &str,
    ) -> EnrollmentResult<CourseEnrollmentInfo>;
}

/// Concrete implementation of EnrollmentService.
pub struct EnrollmentManager {
    data_api: Arc<dyn EnrollmentDataApi>,
    cache: Arc<dyn CacheStore>,
    cache_timeout: Duration,
}

impl EnrollmentManager {
    /// Create new enrollment service instance
    pub fn new(
        data_api: Arc<dyn EnrollmentDataApi>,
        cache: Arc<dyn CacheStore>,
        cache_timeout: Duration,
    ) -> Self {
        Self {
            data_api,
            cache,
            cache_timeout,
        }
    }

    /// Create the service with the data API named in settings.
    pub fn from_settings(
        settings: &Settings,
        registry: &DataApiRegistry,
        cache: Arc<dyn CacheStore>,
    ) -> EnrollmentResult<Self> {
        let data_api = registry.resolve(&settings.data_api)?;
        Ok(Self::new(data_api, cache, settings.cache_timeout()))
    }

    /// Check that `mode` is one of the course's configured modes.
    ///
    /// Course info is always read from the data API, never the cache.
    /// There is no exemption for "honor": a course without modes rejects
    /// every request, and a missing mode never matches.
    pub async fn validate_course_mode(
        &self,
        course_id: &str,
        mode: Option<&str>,
    ) -> EnrollmentResult<()> {
        let course_info = self.data_api.get_course_enrollment_info(course_id).await?;
        let available_modes = course_info.mode_slugs();

        if mode.is_some_and(|mode| available_modes.contains(&mode)) {
            return Ok(());
        }

        let msg = format!(
            "Specified course mode '{}' unavailable for course {}.  Available modes were: {}",
            mode.unwrap_or_default(),
            course_id,
            available_modes.join(", ")
        );
        tracing::warn!("{}", msg);
        Err(EnrollmentError::course_mode_not_found(msg, course_info))
    }

    async fn cached_details(&self, key: &str) -> Option<CourseEnrollmentInfo> {
        match self.cache.get(key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(details) => Some(details),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Discarding unreadable cached course details");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!(
                    key = %key,
                    error = %e,
                    "Error occurred while retrieving course enrollment details from the cache"
                );
                None
            }
        }
    }

    async fn store_details(&self, key: &str, details: &CourseEnrollmentInfo) -> CacheResult<()> {
        let json = serde_json::to_string(details)?;
        self.cache.set(key, json, self.cache_timeout).await
    }
}

#[async_trait]
impl EnrollmentService for EnrollmentManager {
    async fn get_enrollments(&self, user: &str) -> EnrollmentResult<Vec<Enrollment>> {
        self.data_api.get_course_enrollments(user).await
    }

    async fn get_enrollment(
        &self,
        user: &str,
        course_id: &str,
    ) -> EnrollmentResult<Option<Enrollment>> {
        self.data_api.get_course_enrollment(user, course_id).await
    }

    async fn add_enrollment(&self, request: AddEnrollment) -> EnrollmentResult<Enrollment> {
        self.validate_course_mode(&request.course_id, Some(&request.mode))
            .await?;
        self.data_api
            .create_course_enrollment(
                &request.user,
                &request.course_id,
                &request.mode,
                request.is_active,
            )
            .await
    }

    async fn update_enrollment(
        &self,
        user: &str,
        course_id: &str,
        mode: Option<String>,
        is_active: Option<bool>,
    ) -> EnrollmentResult<Enrollment> {
        self.validate_course_mode(course_id, mode.as_deref()).await?;

        match self
            .data_api
            .update_course_enrollment(user, course_id, mode, is_active)
            .await?
        {
            Some(enrollment) => Ok(enrollment),
            None => {
                let msg = format!(
                    "Course Enrollment not found for user {} in course {}",
                    user, course_id
                );
                tracing::warn!("{}", msg);
                Err(EnrollmentError::enrollment_not_found(msg))
            }
        }
    }

    async fn get_course_enrollment_details(
        &self,
        course_id: &str,
    ) -> EnrollmentResult<CourseEnrollmentInfo> {
        let key = course_details_cache_key(course_id);

        if let Some(details) = self.cached_details(&key).await {
            tracing::info!(course_id = %course_id, "Get enrollment data for course (cached)");
            return Ok(details);
        }

        let details = self.data_api.get_course_enrollment_info(course_id).await?;

        if let Err(e) = self.store_details(&key, &details).await {
            tracing::error!(
                course_id = %course_id,
                error = %e,
                "Error occurred while caching course enrollment details"
            );
            return Err(EnrollmentError::course_enrollment(CACHE_WRITE_FAILED));
        }

        tracing::info!(course_id = %course_id, "Get enrollment data for course");
        Ok(details)
    }
}
