//! Enrollment data APIs - Persistence abstraction
//!
//! A data API owns enrollment state. The service layer only talks to the
//! `EnrollmentDataApi` trait; concrete implementations are looked up by
//! name in a `DataApiRegistry`.

mod memory;
mod registry;

use async_trait::async_trait;

use crate::domain::{CourseEnrollmentInfo, Enrollment};
use crate::errors::EnrollmentResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use memory::InMemoryDataApi;
pub use registry::DataApiRegistry;

/// Enrollment data API trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnrollmentDataApi: Send + Sync {
    /// All enrollments of a user
    async fn get_course_enrollments(&self, user: &str) -> EnrollmentResult<Vec<Enrollment>>;

    /// A user's enrollment in one course, if any
    async fn get_course_enrollment(
        &self,
        user: &str,
        course_id: &str,
    ) -> EnrollmentResult<Option<Enrollment>>;

    /// Enroll a user in a course
    async fn create_course_enrollment(
        &self,
        user: &str,
        course_id: &str,
        mode: &str,
        is_active: bool,
    ) -> EnrollmentResult<Enrollment>;

    /// Change mode and/or active flag; `None` when there is no such enrollment
    async fn update_course_enrollment(
        &self,
        user: &str,
        course_id: &str,
        mode: Option<String>,
        is_active: Option<bool>,
    ) -> EnrollmentResult<Option<Enrollment>>;

    /// Course level enrollment information
    async fn get_course_enrollment_info(
        &self,
        course_id: &str,
    ) -> EnrollmentResult<CourseEnrollmentInfo>;
}
