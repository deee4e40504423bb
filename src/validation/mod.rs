//! Edit-link validation logic
//!
//! This module handles HTTP probing of edit links using
//! batched async HEAD requests.

pub mod checker;

// Re-export commonly used items
pub use checker::{CheckEditLinks, CheckReport, LinkChecker, UnreachableEntry};
