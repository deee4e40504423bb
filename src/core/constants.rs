/// Application-wide constants to avoid magic values throughout the codebase.
/// Output format constants
pub mod output_formats {
    /// Text output format - grouped, human-readable report
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain lines without grouping
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 404 Not Found - the broken-link detection signal
    pub const NOT_FOUND: u16 = 404;
}

/// Default configuration values
pub mod defaults {
    /// Default number of entries probed per batch
    pub const BATCH_SIZE: usize = 5;
    /// Default per-request timeout in milliseconds
    pub const TIMEOUT_MS: u64 = 5000;
    /// Default pause after each batch's probes in milliseconds
    pub const BATCH_DELAY_MS: u64 = 1000;

    /// File paths ending with any of these suffixes are never probed.
    /// These specification documents live outside the normal edit-link scheme.
    pub const IGNORE_SUFFIXES: [&str; 3] = [
        "reference/specification/v2.x.md",
        "reference/specification/v3.0.0-explorer.md",
        "reference/specification/v3.0.0.md",
    ];
}

/// Environment variable names, read only at the binary boundary
pub mod env_vars {
    /// Overrides the batch size
    pub const BATCH_SIZE: &str = "DOCS_LINK_CHECK_BATCH_SIZE";
    /// Overrides the per-request timeout in milliseconds
    pub const TIMEOUT: &str = "DOCS_LINK_CHECK_TIMEOUT";
}

/// File discovery constants
pub mod files {
    /// Extension of files eligible for checking
    pub const MARKDOWN_EXTENSION: &str = ".md";
    /// Section index files are never yielded by the walker
    pub const SECTION_FILE: &str = "_section.md";
    /// Leading URL segment stripped before rule matching
    pub const DOCS_PREFIX: &str = "docs/";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(defaults::BATCH_SIZE, 5);
        assert_eq!(defaults::TIMEOUT_MS, 5000);
        assert_eq!(defaults::BATCH_DELAY_MS, 1000);
        assert_eq!(defaults::IGNORE_SUFFIXES.len(), 3);
    }

    #[test]
    fn test_http_status_constants() {
        assert_eq!(http_status::OK, 200);
        assert_eq!(http_status::NOT_FOUND, 404);
    }

    #[test]
    fn test_file_constants() {
        assert_eq!(files::MARKDOWN_EXTENSION, ".md");
        assert_eq!(files::SECTION_FILE, "_section.md");
        assert_eq!(files::DOCS_PREFIX, "docs/");
    }
}
