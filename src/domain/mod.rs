//! Domain layer - Core business entities and logic
//!
//! This module contains the enrollment records exchanged with data APIs
//! and the course about serializer.

pub mod course_about;
pub mod enrollment;

pub use course_about::{
    course_image_url, serialize_content, AboutInfo, CourseAbout, CourseDescriptor, CourseKey,
    CourseMedia,
};
pub use enrollment::{AddEnrollment, CourseEnrollmentInfo, CourseMode, Enrollment};
