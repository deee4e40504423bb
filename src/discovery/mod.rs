//! Markdown discovery and edit-link resolution
//!
//! This module walks the documentation tree, normalizes file paths into
//! URL paths, and derives the candidate edit link for every markdown file.

pub mod resolver;
pub mod walker;

// Re-export commonly used items
pub use resolver::{determine_edit_link, url_path_from_relative};
pub use walker::{MarkdownFile, MarkdownWalker};

use std::path::Path;

use crate::config::EditRule;
use crate::core::error::Result;
use crate::core::types::PathEntry;

/// Walk `root` and build the full entry list, deriving an edit link for
/// each markdown file. Files with no matching rule keep `edit_link = None`
/// and stay in the list for traceability.
///
/// The walker is consumed incrementally; a read failure anywhere in the
/// tree aborts the walk and surfaces the offending directory and cause.
pub fn collect_entries(root: &Path, rules: &[EditRule]) -> Result<Vec<PathEntry>> {
    let mut entries = Vec::new();

    for file in MarkdownWalker::new(root) {
        let file = file?;
        let url_path = url_path_from_relative(&file.rel_path);
        let edit_link = determine_edit_link(&url_path, &file.abs_path, rules);
        entries.push(PathEntry::new(file.abs_path, url_path, edit_link));
    }

    Ok(entries)
}
