use std::path::{Path, PathBuf};

use crate::core::constants::files;
use crate::core::error::{EditLinksError, Result};

/// A markdown file yielded by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    /// Absolute path of the file
    pub abs_path: PathBuf,
    /// Path relative to the walked root
    pub rel_path: PathBuf,
}

/// Lazy, depth-recursing iterator over the markdown files of a
/// documentation tree.
///
/// Only files with a `.md` suffix are yielded, and files named exactly
/// `_section.md` are skipped at any depth. Entries are sorted by file name
/// so traversal order is deterministic. Any read failure, including an
/// unreadable root, surfaces as an error item and aborts the walk.
pub struct MarkdownWalker {
    root: PathBuf,
    inner: ignore::Walk,
}

impl MarkdownWalker {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let mut builder = ignore::WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        Self {
            inner: builder.build(),
            root,
        }
    }

    fn is_eligible(name: &str) -> bool {
        name.ends_with(files::MARKDOWN_EXTENSION) && name != files::SECTION_FILE
    }
}

impl Iterator for MarkdownWalker {
    type Item = Result<MarkdownFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(EditLinksError::Walk {
                        path: self.root.clone(),
                        source,
                    }));
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !Self::is_eligible(&name) {
                continue;
            }

            let abs_path = entry.into_path();
            let rel_path = abs_path
                .strip_prefix(&self.root)
                .unwrap_or(&abs_path)
                .to_path_buf();

            return Some(Ok(MarkdownFile { abs_path, rel_path }));
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn create_docs_tree() -> std::result::Result<tempfile::TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("guides/advanced"))?;
        fs::create_dir_all(base.join("reference"))?;

        fs::write(base.join("index.md"), "# Index")?;
        fs::write(base.join("_section.md"), "# Root section")?;
        fs::write(base.join("notes.txt"), "not markdown")?;
        fs::write(base.join("guides/intro.md"), "# Intro")?;
        fs::write(base.join("guides/_section.md"), "# Guides section")?;
        fs::write(base.join("guides/advanced/tuning.md"), "# Tuning")?;
        fs::write(base.join("reference/api.md"), "# API")?;
        fs::write(base.join("reference/diagram.png"), [0u8; 4])?;

        Ok(temp_dir)
    }

    #[test]
    fn test_walker__yields_only_markdown_files() -> TestResult {
        let temp_dir = create_docs_tree()?;

        let files: Vec<MarkdownFile> =
            MarkdownWalker::new(temp_dir.path()).collect::<Result<_>>()?;

        let names: Vec<String> = files
            .iter()
            .map(|f| f.rel_path.to_string_lossy().to_string())
            .collect();

        assert!(names.contains(&"index.md".to_string()));
        assert!(names.contains(&"guides/intro.md".to_string()));
        assert!(names.contains(&"guides/advanced/tuning.md".to_string()));
        assert!(names.contains(&"reference/api.md".to_string()));
        assert!(!names.contains(&"notes.txt".to_string()));
        assert!(!names.contains(&"reference/diagram.png".to_string()));
        Ok(())
    }

    #[test]
    fn test_walker__never_yields_section_files_at_any_depth() -> TestResult {
        let temp_dir = create_docs_tree()?;

        let files: Vec<MarkdownFile> =
            MarkdownWalker::new(temp_dir.path()).collect::<Result<_>>()?;

        for file in &files {
            assert_ne!(
                file.abs_path.file_name().unwrap().to_string_lossy(),
                "_section.md"
            );
        }
        assert_eq!(files.len(), 4);
        Ok(())
    }

    #[test]
    fn test_walker__relative_paths_are_root_relative() -> TestResult {
        let temp_dir = create_docs_tree()?;

        let files: Vec<MarkdownFile> =
            MarkdownWalker::new(temp_dir.path()).collect::<Result<_>>()?;

        for file in &files {
            assert!(file.rel_path.is_relative());
            assert_eq!(temp_dir.path().join(&file.rel_path), file.abs_path);
        }
        Ok(())
    }

    #[test]
    fn test_walker__deterministic_order() -> TestResult {
        let temp_dir = create_docs_tree()?;

        let first: Vec<MarkdownFile> =
            MarkdownWalker::new(temp_dir.path()).collect::<Result<_>>()?;
        let second: Vec<MarkdownFile> =
            MarkdownWalker::new(temp_dir.path()).collect::<Result<_>>()?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_walker__unreadable_root_fails_immediately() {
        let mut walker = MarkdownWalker::new("/definitely/nonexistent/docs/12345");

        let first = walker.next().expect("walker should yield an error item");
        let err = first.unwrap_err();
        assert!(
            format!("{err}").contains("/definitely/nonexistent/docs/12345"),
            "error should carry the root path: {err}"
        );
    }

    #[test]
    fn test_walker__empty_directory_yields_nothing() -> TestResult {
        let temp_dir = tempfile::tempdir()?;

        let files: Vec<MarkdownFile> =
            MarkdownWalker::new(temp_dir.path()).collect::<Result<_>>()?;

        assert!(files.is_empty());
        Ok(())
    }
}
