//! Domain-level error taxonomy for refcheck.
//!
//! Descriptor construction is total over well-formed records and defines no
//! error cases; only the raw object adaptation in [`crate::raw`] can fail.

/// Errors produced by raw record adaptation.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed identity line: {line}")]
    MalformedIdentity { line: String },

    #[error("commit object {id} has no message section")]
    MissingMessage { id: String },
}

/// Result type for refcheck domain operations.
pub type Result<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display() {
        let err = RecordError::MalformedIdentity {
            line: "committer nobody".to_string(),
        };
        assert!(err.to_string().contains("malformed identity"));
        assert!(err.to_string().contains("committer nobody"));

        let err = RecordError::MissingMessage {
            id: "a1b2c3".to_string(),
        };
        assert!(err.to_string().contains("a1b2c3"));
        assert!(err.to_string().contains("no message section"));
    }
}
