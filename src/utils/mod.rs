//! Utility functions for currency, date and string formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{format_deadline, format_taka, truncate_string};
