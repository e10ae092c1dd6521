//! Utility modules for the list viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_count, format_memory_mb, format_window, get_current_memory_mb};
