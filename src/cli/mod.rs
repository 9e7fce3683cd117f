//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `list`, `get` - Read enrollments
//! - `enroll`, `update` - Write enrollments
//! - `details` - Course enrollment details
//! - `about` - Course about serialization

pub mod args;

pub use args::{Cli, Commands};
