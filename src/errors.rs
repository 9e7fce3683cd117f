//! Centralized error handling.
//!
//! Provides a unified error type for the enrollment layer,
//! with automatic HTTP response conversion for callers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::CourseEnrollmentInfo;

/// Enrollment error types
#[derive(Error, Debug)]
pub enum EnrollmentError {
    // Configuration
    #[error("Could not load enrollment data API at '{0}'")]
    ApiLoad(String),

    // Resource errors
    #[error("{message}")]
    CourseModeNotFound {
        message: String,
        course_info: Box<CourseEnrollmentInfo>,
    },

    #[error("{0}")]
    EnrollmentNotFound(String),

    #[error("Course {0} not found")]
    CourseNotFound(String),

    // Validation
    #[error("Invalid course key: {0}")]
    InvalidCourseKey(String),

    // Operational
    #[error("{0}")]
    CourseEnrollment(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    course_details: Option<CourseEnrollmentInfo>,
}

impl EnrollmentError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            EnrollmentError::ApiLoad(_) => "API_LOAD_ERROR",
            EnrollmentError::CourseModeNotFound { .. } => "COURSE_MODE_NOT_FOUND",
            EnrollmentError::EnrollmentNotFound(_) => "ENROLLMENT_NOT_FOUND",
            EnrollmentError::CourseNotFound(_) => "COURSE_NOT_FOUND",
            EnrollmentError::InvalidCourseKey(_) => "INVALID_COURSE_KEY",
            EnrollmentError::CourseEnrollment(_) => "COURSE_ENROLLMENT_ERROR",
            EnrollmentError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            EnrollmentError::CourseModeNotFound { .. } | EnrollmentError::InvalidCourseKey(_) => {
                StatusCode::BAD_REQUEST
            }
            EnrollmentError::EnrollmentNotFound(_) | EnrollmentError::CourseNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            EnrollmentError::ApiLoad(_)
            | EnrollmentError::CourseEnrollment(_)
            | EnrollmentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this is one of the not-found style errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EnrollmentError::CourseModeNotFound { .. }
                | EnrollmentError::EnrollmentNotFound(_)
                | EnrollmentError::CourseNotFound(_)
        )
    }

    /// Enrollment info attached to a course mode error
    pub fn course_info(&self) -> Option<&CourseEnrollmentInfo> {
        match self {
            EnrollmentError::CourseModeNotFound { course_info, .. } => Some(&**course_info),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            EnrollmentError::ApiLoad(path) => {
                tracing::error!(path = %path, "Enrollment data API unavailable");
                "An internal error occurred".to_string()
            }
            EnrollmentError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();
        let message = self.user_message();
        let course_details = match self {
            EnrollmentError::CourseModeNotFound { course_info, .. } => Some(*course_info),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                course_details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type EnrollmentResult<T> = Result<T, EnrollmentError>;

/// Convenience constructors
impl EnrollmentError {
    pub fn course_mode_not_found(
        message: impl Into<String>,
        course_info: CourseEnrollmentInfo,
    ) -> Self {
        EnrollmentError::CourseModeNotFound {
            message: message.into(),
            course_info: Box::new(course_info),
        }
    }

    pub fn enrollment_not_found(msg: impl Into<String>) -> Self {
        EnrollmentError::EnrollmentNotFound(msg.into())
    }

    pub fn course_enrollment(msg: impl Into<String>) -> Self {
        EnrollmentError::CourseEnrollment(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        EnrollmentError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourseMode;

    fn empty_info() -> CourseEnrollmentInfo {
        CourseEnrollmentInfo::new("edX/DemoX/2014T2")
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            EnrollmentError::ApiLoad("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            EnrollmentError::course_mode_not_found("nope", empty_info()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EnrollmentError::enrollment_not_found("gone").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EnrollmentError::course_enrollment("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_family() {
        assert!(EnrollmentError::course_mode_not_found("m", empty_info()).is_not_found());
        assert!(EnrollmentError::enrollment_not_found("e").is_not_found());
        assert!(EnrollmentError::CourseNotFound("c".into()).is_not_found());
        assert!(!EnrollmentError::course_enrollment("x").is_not_found());
        assert!(!EnrollmentError::ApiLoad("x".into()).is_not_found());
    }

    #[test]
    fn test_course_mode_error_keeps_payload() {
        let err = EnrollmentError::course_mode_not_found("bad mode", empty_info());
        assert_eq!(err.to_string(), "bad mode");
        assert_eq!(err.course_info().unwrap().course_id, "edX/DemoX/2014T2");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = EnrollmentError::internal("secret detail");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    async fn response_json(err: EnrollmentError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_course_mode_response_carries_course_details() {
        let info = empty_info().with_mode(CourseMode::new("honor", "Honor Code Certificate"));
        let err = EnrollmentError::course_mode_not_found(
            "Specified course mode 'verified' unavailable",
            info,
        );

        let (status, body) = response_json(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "COURSE_MODE_NOT_FOUND");
        assert_eq!(
            body["error"]["message"],
            "Specified course mode 'verified' unavailable"
        );
        let details = &body["error"]["course_details"];
        assert_eq!(details["course_id"], "edX/DemoX/2014T2");
        assert_eq!(details["course_modes"].as_array().unwrap().len(), 1);
        assert_eq!(details["course_modes"][0]["slug"], "honor");
    }

    #[tokio::test]
    async fn test_api_load_response_hides_path() {
        let err = EnrollmentError::ApiLoad("missing.module".into());

        let (status, body) = response_json(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "API_LOAD_ERROR");
        assert_eq!(body["error"]["message"], "An internal error occurred");
        assert!(body["error"].get("course_details").is_none());
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let err = EnrollmentError::enrollment_not_found("No enrollment for Bob");

        let (status, body) = response_json(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "ENROLLMENT_NOT_FOUND");
        assert_eq!(body["error"]["message"], "No enrollment for Bob");
    }
}
