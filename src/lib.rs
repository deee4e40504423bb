//! editlinks - verify the "edit this page" links of a markdown
//! documentation tree.
//!
//! The pipeline walks a documentation root, derives an edit URL for every
//! markdown file from an ordered prefix-rule table, and probes each URL
//! with an HTTP HEAD request in concurrently-running, paced batches.
//! Links answering 404 are reported as broken.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export the main API surface
pub use config::{Config, EditRule, load_edit_rules};
pub use core::error::{EditLinksError, Result};
pub use core::types::PathEntry;
pub use discovery::collect_entries;
pub use validation::{CheckEditLinks, CheckReport, LinkChecker};
