//! Built-in in-memory data API.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::EnrollmentDataApi;
use crate::domain::{AddEnrollment, CourseEnrollmentInfo, Enrollment};
use crate::errors::{EnrollmentError, EnrollmentResult};

struct EnrollmentRow {
    created: DateTime<Utc>,
    mode: String,
    is_active: bool,
}

/// Enrollment state held in process memory.
///
/// Enrollments are keyed by (user, course) so listings come back ordered
/// by course id.
#[derive(Default)]
pub struct InMemoryDataApi {
    courses: RwLock<HashMap<String, CourseEnrollmentInfo>>,
    enrollments: RwLock<BTreeMap<(String, String), EnrollmentRow>>,
}

impl InMemoryDataApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a data API seeded with courses.
    pub fn with_courses(courses: impl IntoIterator<Item = CourseEnrollmentInfo>) -> Self {
        let courses = courses
            .into_iter()
            .map(|info| (info.course_id.clone(), info))
            .collect();

        Self {
            courses: RwLock::new(courses),
            enrollments: RwLock::default(),
        }
    }

    /// Seed enrollments for courses that are already present.
    ///
    /// Fails with `CourseNotFound` if a seeded enrollment names an unknown
    /// course.
    pub fn with_enrollments(
        mut self,
        enrollments: impl IntoIterator<Item = AddEnrollment>,
    ) -> EnrollmentResult<Self> {
        let courses = self.courses.get_mut();
        let rows = self.enrollments.get_mut();

        for request in enrollments {
            if !courses.contains_key(&request.course_id) {
                return Err(EnrollmentError::CourseNotFound(request.course_id));
            }
            rows.insert(
                (request.user, request.course_id),
                EnrollmentRow {
                    created: Utc::now(),
                    mode: request.mode,
                    is_active: request.is_active,
                },
            );
        }

        Ok(self)
    }

    /// Add or replace a course's enrollment information.
    pub async fn add_course(&self, info: CourseEnrollmentInfo) {
        tracing::debug!(course_id = %info.course_id, "Course enrollment info stored");
        self.courses
            .write()
            .await
            .insert(info.course_id.clone(), info);
    }

    async fn course_info(&self, course_id: &str) -> EnrollmentResult<CourseEnrollmentInfo> {
        self.courses
            .read()
            .await
            .get(course_id)
            .cloned()
            .ok_or_else(|| EnrollmentError::CourseNotFound(course_id.to_string()))
    }

    async fn to_enrollment(
        &self,
        user: &str,
        course_id: &str,
        row: &EnrollmentRow,
    ) -> EnrollmentResult<Enrollment> {
        Ok(Enrollment {
            created: row.created,
            mode: row.mode.clone(),
            is_active: row.is_active,
            user: user.to_string(),
            course: self.course_info(course_id).await?,
        })
    }
}

fn row_key(user: &str, course_id: &str) -> (String, String) {
    (user.to_string(), course_id.to_string())
}

#[async_trait]
impl EnrollmentDataApi for InMemoryDataApi {
    async fn get_course_enrollments(&self, user: &str) -> EnrollmentResult<Vec<Enrollment>> {
        let enrollments = self.enrollments.read().await;
        let mut result = Vec::new();

        for ((row_user, course_id), row) in enrollments.iter() {
            if row_user == user {
                result.push(self.to_enrollment(user, course_id, row).await?);
            }
        }

        Ok(result)
    }

    async fn get_course_enrollment(
        &self,
        user: &str,
        course_id: &str,
    ) -> EnrollmentResult<Option<Enrollment>> {
        let enrollments = self.enrollments.read().await;
        match enrollments.get(&row_key(user, course_id)) {
            Some(row) => Ok(Some(self.to_enrollment(user, course_id, row).await?)),
            None => Ok(None),
        }
    }

    async fn create_course_enrollment(
        &self,
        user: &str,
        course_id: &str,
        mode: &str,
        is_active: bool,
    ) -> EnrollmentResult<Enrollment> {
        let course = self.course_info(course_id).await?;
        let mut enrollments = self.enrollments.write().await;

        // Re-enrolling updates the existing record
        let row = enrollments
            .entry(row_key(user, course_id))
            .and_modify(|row| {
                row.mode = mode.to_string();
                row.is_active = is_active;
            })
            .or_insert_with(|| EnrollmentRow {
                created: Utc::now(),
                mode: mode.to_string(),
                is_active,
            });

        tracing::debug!(user = %user, course_id = %course_id, mode = %mode, "Enrollment saved");

        Ok(Enrollment {
            created: row.created,
            mode: row.mode.clone(),
            is_active: row.is_active,
            user: user.to_string(),
            course,
        })
    }

    async fn update_course_enrollment(
        &self,
        user: &str,
        course_id: &str,
        mode: Option<String>,
        is_active: Option<bool>,
    ) -> EnrollmentResult<Option<Enrollment>> {
        let mut enrollments = self.enrollments.write().await;
        let Some(row) = enrollments.get_mut(&row_key(user, course_id)) else {
            return Ok(None);
        };

        if let Some(mode) = mode {
            row.mode = mode;
        }
        if let Some(is_active) = is_active {
            row.is_active = is_active;
        }

        let row = &*row;
        Ok(Some(self.to_enrollment(user, course_id, row).await?))
    }

    async fn get_course_enrollment_info(
        &self,
        course_id: &str,
    ) -> EnrollmentResult<CourseEnrollmentInfo> {
        self.course_info(course_id).await
    }
}
