//! Error types.
//!
//! The summarization core itself never fails for in-domain text; errors here
//! cover the collaborator boundaries (document extraction) and invalid
//! caller-supplied parameters.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A source document could not be read or parsed. Fatal to the enclosing
    /// request; not retried.
    #[error("text extraction failed for {path}: {reason}")]
    ExtractionFailed { path: PathBuf, reason: String },

    /// Retention ratio outside (0, 1].
    #[error("invalid retention ratio {0}: must be in (0, 1]")]
    InvalidRatio(f64),

    /// I/O error while reading a source document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn extraction_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::extraction_failed("doc.pdf", "truncated xref table");
        assert!(err.to_string().contains("doc.pdf"));
        assert!(err.to_string().contains("truncated xref"));

        let err = Error::InvalidRatio(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}
