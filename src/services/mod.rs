//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod enrollment_service;

pub use enrollment_service::{EnrollmentManager, EnrollmentService};
