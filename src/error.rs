//! Error types for loading audit documents and writing reports.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that abort report generation.
///
/// Missing optional fields and missing screenshots are never errors; they
/// fall back to defaults while rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read audit data from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid audit JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_path_and_position() {
        let source = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = ReportError::Parse {
            path: PathBuf::from("audit.json"),
            source,
        };

        assert!(err.to_string().contains("audit.json"));

        let cause = std::error::Error::source(&err).map(ToString::to_string);
        assert!(cause.unwrap_or_default().contains("line 1"));
    }
}
