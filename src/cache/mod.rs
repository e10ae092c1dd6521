//! Caching modules for performance optimization.

pub mod row_cache;

// Re-export commonly used types
pub use row_cache::{RowCacheKey, RowCountCache};
