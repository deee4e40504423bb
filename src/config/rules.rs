use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::Result;

/// One entry of the edit-link rule table.
///
/// `value` is matched by substring containment against a file's URL path
/// (after a leading `docs/` segment is stripped); `href` is the base of the
/// edit URL built for matching files. An empty `value` acts as a catch-all
/// fallback. Rule order is significant: the first match wins, not the most
/// specific one, so the table must be kept in its configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRule {
    pub value: String,
    pub href: String,
}

impl EditRule {
    pub fn new(value: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            href: href.into(),
        }
    }

    /// Whether this rule is the catch-all fallback.
    pub fn is_fallback(&self) -> bool {
        self.value.is_empty()
    }
}

/// Load the edit-rule table from a JSON array of `{value, href}` objects.
pub fn load_edit_rules<P: AsRef<Path>>(path: P) -> Result<Vec<EditRule>> {
    let content = fs::read_to_string(path)?;
    let rules: Vec<EditRule> = serde_json::from_str(&content)?;
    Ok(rules)
}
