//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Enrollment data APIs and their registry
//! - Caching systems (in-process, Redis)

pub mod cache;
pub mod data_api;

pub use cache::{CacheError, CacheResult, CacheStore, MemoryCache, RedisCache};
pub use data_api::{DataApiRegistry, EnrollmentDataApi, InMemoryDataApi};

#[cfg(any(test, feature = "test-utils"))]
pub use cache::MockCacheStore;
#[cfg(any(test, feature = "test-utils"))]
pub use data_api::MockEnrollmentDataApi;
