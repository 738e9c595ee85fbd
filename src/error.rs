//! Error types for genetab
//!
//! Transform failures are fatal and propagate: a missing required column or
//! an unreadable source file aborts the stage before any output is written.
//! Rows with missing key fields are data cleaning, not errors, and are
//! filtered silently by the builders.

use thiserror::Error;

/// Main error type for genetab operations
#[derive(Error, Debug)]
pub enum GenetabError {
    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON serialization or parsing error (version manifest)
    #[error("JSON error: {msg}")]
    Json { msg: String },

    /// A required source column is absent from a header row
    #[error("Required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: String },

    /// A key field failed integer parsing
    #[error("Invalid integer '{value}' in column '{column}' of {path}")]
    InvalidInteger {
        column: String,
        value: String,
        path: String,
    },

    /// A source file could not be retrieved
    #[error("Download failed for {url}: {msg}")]
    Download { url: String, msg: String },
}

impl From<std::io::Error> for GenetabError {
    fn from(err: std::io::Error) -> Self {
        GenetabError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GenetabError {
    fn from(err: serde_json::Error) -> Self {
        GenetabError::Json {
            msg: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = GenetabError::MissingColumn {
            column: "GeneID".to_string(),
            path: "download/Homo_sapiens.gene_info.gz".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("GeneID"));
        assert!(display.contains("gene_info"));
    }

    #[test]
    fn test_invalid_integer_display() {
        let err = GenetabError::InvalidInteger {
            column: "GeneID".to_string(),
            value: "not-a-number".to_string(),
            path: "genes.tsv".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("not-a-number"));
        assert!(display.contains("GeneID"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GenetabError = io_err.into();
        assert!(matches!(err, GenetabError::Io { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err: GenetabError = json_err.into();
        assert!(matches!(err, GenetabError::Json { .. }));
    }
}
