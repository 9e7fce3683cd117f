//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_COURSE_MODE;

/// Enrollment - Course enrollment access layer
#[derive(Parser, Debug)]
#[command(name = "enrollment")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with course enrollment info used to seed the built-in data API
    #[arg(short, long, global = true, env = "ENROLLMENT_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a user's enrollments
    List {
        /// Username
        user: String,
    },

    /// Show a user's enrollment in a course
    Get {
        /// Username
        user: String,
        /// Course id (e.g., "edX/DemoX/2014T2")
        course_id: String,
    },

    /// Enroll a user in a course
    Enroll(EnrollArgs),

    /// Update an existing enrollment
    Update(UpdateArgs),

    /// Show course enrollment details
    Details {
        /// Course id
        course_id: String,
    },

    /// Serialize course about information
    About(AboutArgs),
}

/// Arguments for the enroll command
#[derive(Parser, Debug)]
pub struct EnrollArgs {
    /// Username
    pub user: String,

    /// Course id
    pub course_id: String,

    /// Course mode slug
    #[arg(short, long, default_value = DEFAULT_COURSE_MODE)]
    pub mode: String,

    /// Create the enrollment inactive
    #[arg(long)]
    pub inactive: bool,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Username
    pub user: String,

    /// Course id
    pub course_id: String,

    /// New course mode slug
    #[arg(short, long)]
    pub mode: Option<String>,

    /// New active flag
    #[arg(long)]
    pub active: Option<bool>,
}

/// Arguments for the about command
#[derive(Parser, Debug)]
pub struct AboutArgs {
    /// JSON file describing the course
    pub course: PathBuf,

    /// JSON file mapping about section names to content
    #[arg(short, long)]
    pub about: Option<PathBuf>,
}
