use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A markdown file discovered under the documentation root, together with
/// the edit link derived for it.
///
/// `url_path` is the root-relative path with OS separators normalized to `/`
/// and the `.md` extension stripped. `edit_link` is `None` when no edit rule
/// matched; such entries are kept for traceability but never probed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PathEntry {
    /// Absolute path of the markdown file
    pub file_path: PathBuf,
    /// Normalized URL path derived from the file's location
    pub url_path: String,
    /// Candidate "edit this page" URL, if any rule matched
    pub edit_link: Option<String>,
}

impl PathEntry {
    pub fn new(
        file_path: impl Into<PathBuf>,
        url_path: impl Into<String>,
        edit_link: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            url_path: url_path.into(),
            edit_link,
        }
    }

    /// Whether this entry carries a probe-able edit link.
    pub fn has_edit_link(&self) -> bool {
        self.edit_link.is_some()
    }

    /// Whether this entry's file path ends with any of the given suffixes.
    pub fn is_ignored(&self, ignore_suffixes: &[String]) -> bool {
        let path = self.file_path.to_string_lossy();
        ignore_suffixes.iter().any(|suffix| path.ends_with(suffix))
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.edit_link {
            Some(link) => write!(f, "{} generated from {}", link, self.file_path.display()),
            None => write!(f, "(no edit link) {}", self.file_path.display()),
        }
    }
}
