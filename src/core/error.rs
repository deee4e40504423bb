use std::fmt;
use std::path::PathBuf;

/// Error types for editlinks operations
#[derive(Debug)]
pub enum EditLinksError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Edit-rule table parsing error
    RuleParsing(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Directory walking error, with the path that failed
    Walk {
        path: PathBuf,
        source: ignore::Error,
    },

    /// HTTP client error
    Http(reqwest::Error),

    /// Run-level deadline elapsed before all probes finished
    DeadlineExceeded(u64),
}

impl fmt::Display for EditLinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditLinksError::Io(err) => write!(f, "IO error: {err}"),
            EditLinksError::Config(msg) => write!(f, "Configuration error: {msg}"),
            EditLinksError::RuleParsing(err) => write!(f, "Edit-rule parsing error: {err}"),
            EditLinksError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            EditLinksError::Walk { path, source } => {
                write!(f, "Error walking directory {}: {source}", path.display())
            }
            EditLinksError::Http(err) => write!(f, "HTTP error: {err}"),
            EditLinksError::DeadlineExceeded(secs) => {
                write!(f, "Deadline exceeded: run did not finish within {secs}s")
            }
        }
    }
}

impl std::error::Error for EditLinksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditLinksError::Io(err) => Some(err),
            EditLinksError::RuleParsing(err) => Some(err),
            EditLinksError::TomlParsing(err) => Some(err),
            EditLinksError::Walk { source, .. } => Some(source),
            EditLinksError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EditLinksError {
    fn from(err: std::io::Error) -> Self {
        EditLinksError::Io(err)
    }
}

impl From<serde_json::Error> for EditLinksError {
    fn from(err: serde_json::Error) -> Self {
        EditLinksError::RuleParsing(err)
    }
}

impl From<toml::de::Error> for EditLinksError {
    fn from(err: toml::de::Error) -> Self {
        EditLinksError::TomlParsing(err)
    }
}

impl From<reqwest::Error> for EditLinksError {
    fn from(err: reqwest::Error) -> Self {
        EditLinksError::Http(err)
    }
}

/// Type alias for Results using EditLinksError
pub type Result<T> = std::result::Result<T, EditLinksError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::path::Path;

    #[test]
    fn test_error_display() {
        let config_error = EditLinksError::Config("Invalid batch size".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid batch size"
        );

        let deadline_error = EditLinksError::DeadlineExceeded(30);
        assert_eq!(
            format!("{deadline_error}"),
            "Deadline exceeded: run did not finish within 30s"
        );
    }

    #[test]
    fn test_walk_error_includes_path() {
        let walk_error = ignore::WalkBuilder::new("/non/existent/path/12345")
            .build()
            .next()
            .unwrap()
            .unwrap_err();
        let error = EditLinksError::Walk {
            path: Path::new("/non/existent/path/12345").to_path_buf(),
            source: walk_error,
        };

        let display_str = format!("{error}");
        assert!(display_str.starts_with("Error walking directory /non/existent/path/12345:"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error = EditLinksError::from(io_error);

        match error {
            EditLinksError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json [").unwrap_err();
        let error = EditLinksError::from(json_error);

        match error {
            EditLinksError::RuleParsing(_) => {} // Expected
            _ => panic!("Expected RuleParsing variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let error = EditLinksError::from(toml_error);

        match error {
            EditLinksError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error = EditLinksError::Io(io_error);
        assert!(error.source().is_some());

        let config_error = EditLinksError::Config("test".to_string());
        assert!(config_error.source().is_none());

        let deadline_error = EditLinksError::DeadlineExceeded(5);
        assert!(deadline_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EditLinksError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(EditLinksError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
    }
}
