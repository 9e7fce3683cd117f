//! Commands module - CLI command implementations.
//!
//! Each command group is implemented in its own module for separation of concerns.

pub mod about;
pub mod enrollment;

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{EnrollmentError, EnrollmentResult};

/// Read and parse a JSON file.
async fn read_json<T: DeserializeOwned>(path: &Path) -> EnrollmentResult<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        EnrollmentError::internal(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        EnrollmentError::internal(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> EnrollmentResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| EnrollmentError::internal(format!("Serialization error: {}", e)))?;
    println!("{}", json);
    Ok(())
}
