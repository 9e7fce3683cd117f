//! Enrollment - Course enrollment access layer
//!
//! Validates enrollment requests against a course's configured modes,
//! delegates persistence to a pluggable data API and caches course
//! enrollment details.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Enrollment records and course about serialization
//! - **services**: Enrollment use cases
//! - **infra**: Data APIs and cache stores
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Enroll a user using seeded course data
//! cargo run -- --fixtures courses.json enroll Bob edX/DemoX/2014T2 --mode audit
//!
//! # Show course enrollment details
//! cargo run -- --fixtures courses.json details edX/DemoX/2014T2
//!
//! # Serialize course about information
//! cargo run -- about course.json --about about.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Settings;
pub use domain::{CourseEnrollmentInfo, CourseMode, Enrollment};
pub use errors::{EnrollmentError, EnrollmentResult};
pub use infra::{CacheStore, DataApiRegistry, EnrollmentDataApi};
pub use services::{EnrollmentManager, EnrollmentService};
