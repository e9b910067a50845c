//! Utility modules for common functionality

pub mod labels;

// Re-export commonly used helpers
pub use labels::{capitalize_words, humanize_key, title_case};
