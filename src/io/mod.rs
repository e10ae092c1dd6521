//! I/O modules for document loading.

pub mod file_loader;
pub mod async_loader;

// Re-export commonly used types
pub use async_loader::{AsyncLoader, LoadResult};
