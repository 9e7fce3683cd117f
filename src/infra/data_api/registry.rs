//! Named registry of data API implementations.

use std::collections::HashMap;
use std::sync::Arc;

use super::{EnrollmentDataApi, InMemoryDataApi};
use crate::config::DEFAULT_DATA_API;
use crate::errors::{EnrollmentError, EnrollmentResult};

/// Maps configured names to data API implementations.
#[derive(Clone, Default)]
pub struct DataApiRegistry {
    apis: HashMap<String, Arc<dyn EnrollmentDataApi>>,
}

impl DataApiRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the in-memory data API under `DEFAULT_DATA_API`
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_DATA_API, Arc::new(InMemoryDataApi::new()));
        registry
    }

    /// Register an implementation, returning the one it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        api: Arc<dyn EnrollmentDataApi>,
    ) -> Option<Arc<dyn EnrollmentDataApi>> {
        self.apis.insert(name.into(), api)
    }

    /// Look up an implementation by name.
    pub fn resolve(&self, name: &str) -> EnrollmentResult<Arc<dyn EnrollmentDataApi>> {
        match self.apis.get(name) {
            Some(api) => Ok(api.clone()),
            None => {
                tracing::error!(path = %name, "Could not load enrollment data API");
                Err(EnrollmentError::ApiLoad(name.to_string()))
            }
        }
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.apis.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
