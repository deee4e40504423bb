// Report rendering for the supported output formats

use serde::Serialize;

use crate::core::constants::output_formats;
use crate::validation::CheckReport;

/// Run-level counts displayed alongside the report
#[derive(Debug, Clone, Serialize)]
pub struct DisplayMetadata {
    /// Markdown files discovered under the root
    pub files_scanned: usize,
    /// Entries that resolved to an edit link
    pub with_edit_links: usize,
    /// Entries skipped by the ignore-suffix list
    pub ignored: usize,
}

/// Render the report in the requested format.
pub fn render_report(report: &CheckReport, metadata: &DisplayMetadata, format: &str) -> String {
    match format {
        output_formats::JSON => render_json(report, metadata),
        output_formats::MINIMAL => render_minimal(report),
        _ => render_text(report, metadata),
    }
}

/// Print the rendered report to stdout.
pub fn display_report(report: &CheckReport, metadata: &DisplayMetadata, format: &str) {
    println!("{}", render_report(report, metadata, format));
}

fn render_text(report: &CheckReport, metadata: &DisplayMetadata) -> String {
    let mut out = String::new();

    if report.is_clean() {
        out.push_str("All edit links are valid.\n");
    }

    if !report.broken.is_empty() {
        out.push_str("\nURLs returning 404:\n\n");
        for entry in &report.broken {
            out.push_str(&format!("- {entry}\n"));
        }
        out.push_str(&format!(
            "\nTotal invalid URLs found: {}\n",
            report.broken_count()
        ));
    }

    if !report.unreachable.is_empty() {
        out.push_str("\nURLs that could not be checked:\n\n");
        for unreachable in &report.unreachable {
            out.push_str(&format!(
                "- {} ({})\n",
                unreachable.entry, unreachable.reason
            ));
        }
        out.push_str(&format!(
            "\nTotal unreachable URLs: {}\n",
            report.unreachable.len()
        ));
    }

    out.push_str(&format!(
        "\nChecked {} of {} markdown file(s) ({} ignored)",
        metadata.with_edit_links - metadata.ignored,
        metadata.files_scanned,
        metadata.ignored
    ));

    out
}

fn render_minimal(report: &CheckReport) -> String {
    let mut lines = Vec::new();

    for entry in &report.broken {
        if let Some(link) = &entry.edit_link {
            lines.push(format!("404 {} {}", link, entry.file_path.display()));
        }
    }
    for unreachable in &report.unreachable {
        if let Some(link) = &unreachable.entry.edit_link {
            lines.push(format!("ERR {} {}", link, unreachable.reason));
        }
    }

    if lines.is_empty() {
        "OK".to_string()
    } else {
        lines.join("\n")
    }
}

fn render_json(report: &CheckReport, metadata: &DisplayMetadata) -> String {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        metadata: &'a DisplayMetadata,
        report: &'a CheckReport,
    }

    serde_json::to_string_pretty(&JsonReport { metadata, report })
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::types::PathEntry;
    use crate::validation::UnreachableEntry;

    fn metadata() -> DisplayMetadata {
        DisplayMetadata {
            files_scanned: 3,
            with_edit_links: 2,
            ignored: 0,
        }
    }

    fn broken_report() -> CheckReport {
        CheckReport {
            broken: vec![PathEntry::new(
                "/docs/a/b.md",
                "a/b",
                Some("https://x/b.md".to_string()),
            )],
            unreachable: vec![],
        }
    }

    #[test]
    fn test_render_text__clean_run() {
        let report = CheckReport::default();
        let out = render_report(&report, &metadata(), "text");

        assert!(out.starts_with("All edit links are valid."));
    }

    #[test]
    fn test_render_text__broken_links_listed_with_source() {
        let out = render_report(&broken_report(), &metadata(), "text");

        assert!(out.contains("URLs returning 404:"));
        assert!(out.contains("- https://x/b.md generated from /docs/a/b.md"));
        assert!(out.contains("Total invalid URLs found: 1"));
    }

    #[test]
    fn test_render_text__unreachable_section() {
        let report = CheckReport {
            broken: vec![],
            unreachable: vec![UnreachableEntry {
                entry: PathEntry::new("/docs/x.md", "x", Some("https://x/x.md".to_string())),
                reason: "connection refused".to_string(),
            }],
        };

        let out = render_report(&report, &metadata(), "text");

        assert!(!out.contains("All edit links are valid."));
        assert!(out.contains("URLs that could not be checked:"));
        assert!(out.contains("(connection refused)"));
        assert!(out.contains("Total unreachable URLs: 1"));
    }

    #[test]
    fn test_render_minimal() {
        let out = render_report(&broken_report(), &metadata(), "minimal");
        assert_eq!(out, "404 https://x/b.md /docs/a/b.md");

        let clean = render_report(&CheckReport::default(), &metadata(), "minimal");
        assert_eq!(clean, "OK");
    }

    #[test]
    fn test_render_json_is_parseable() {
        let out = render_report(&broken_report(), &metadata(), "json");

        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(parsed["metadata"]["files_scanned"], 3);
        assert_eq!(parsed["report"]["broken"][0]["edit_link"], "https://x/b.md");
    }

    #[test]
    fn test_unknown_format_falls_back_to_text() {
        let out = render_report(&broken_report(), &metadata(), "something-else");
        assert!(out.contains("URLs returning 404:"));
    }
}
