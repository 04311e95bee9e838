//! # Error Types

/// Errors from wordcarver operations.
///
/// Segmentation itself never fails; these come from dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum WordcarverError {
    /// A dictionary entry line could not be parsed.
    #[error("malformed dictionary entry {line:?}: {reason}")]
    MalformedEntry {
        /// The offending line, trimmed.
        line: String,

        /// Why the line was rejected.
        reason: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WordcarverError {
    /// Build a [`WordcarverError::MalformedEntry`].
    pub fn malformed<L, R>(
        line: L,
        reason: R,
    ) -> Self
    where
        L: Into<String>,
        R: Into<String>,
    {
        Self::MalformedEntry {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for wordcarver operations.
pub type WCResult<T> = core::result::Result<T, WordcarverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = WordcarverError::malformed("foo", "missing frequency");
        assert_eq!(
            err.to_string(),
            "malformed dictionary entry \"foo\": missing frequency"
        );
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: WordcarverError = io.into();
        assert!(matches!(err, WordcarverError::Io(_)));
        assert_eq!(err.to_string(), "nope");
    }
}
