use std::path::Path;

use crate::config::EditRule;
use crate::core::constants::files;

/// Normalize a root-relative file path into a URL path: OS separators
/// become `/` and the `.md` extension is stripped.
pub fn url_path_from_relative(rel_path: &Path) -> String {
    let joined = rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    joined
        .strip_suffix(files::MARKDOWN_EXTENSION)
        .unwrap_or(&joined)
        .to_string()
}

/// Derive the edit link for a markdown file from the ordered rule table.
///
/// A leading `docs/` segment is stripped from `url_path` before matching.
/// The first rule whose `value` is contained anywhere in the stripped path
/// wins. Two URL shapes come out of this, reflecting the two edit-URL
/// schemes used by different documentation sources:
///
/// - fallback rule (empty `value`): `{href}/docs/{url_path}.md`, built from
///   the original, un-stripped `url_path`
/// - specific rule: `{href}/{basename}`, re-attaching the file's own name
///   including its extension
///
/// Returns `None` when no rule matches; callers keep such entries out of
/// network probing.
pub fn determine_edit_link(
    url_path: &str,
    file_path: &Path,
    rules: &[EditRule],
) -> Option<String> {
    let matching_key = url_path.strip_prefix(files::DOCS_PREFIX).unwrap_or(url_path);

    let rule = rules
        .iter()
        .find(|rule| matching_key.contains(rule.value.as_str()))?;

    if rule.is_fallback() {
        return Some(format!("{}/docs/{}.md", rule.href, url_path));
    }

    let basename = file_path.file_name()?.to_string_lossy();
    Some(format!("{}/{}", rule.href, basename))
}
