//! Contact plan error types.

use std::path::PathBuf;

use crate::domain::ContactId;

/// Errors that can occur while building a contact plan.
///
/// Any of these aborts construction; no partial plan is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A record does not parse into the six required fields
    #[error("malformed record at line {line}: {reason} (in {content:?})")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// Two records share the same contact id
    #[error("duplicate contact id {id} at line {line}")]
    DuplicateContactId { id: ContactId, line: usize },

    /// The plan file could not be read
    #[error("failed to read contact plan {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlanError::MalformedRecord {
            line: 3,
            content: "1 0 10".to_string(),
            reason: "expected 6 fields, found 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record at line 3: expected 6 fields, found 3 (in \"1 0 10\")"
        );

        let err = PlanError::DuplicateContactId {
            id: ContactId(4),
            line: 9,
        };
        assert_eq!(err.to_string(), "duplicate contact id 4 at line 9");

        let err = PlanError::Io {
            path: PathBuf::from("plans/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read contact plan plans/missing.txt: not found"
        );
    }
}
