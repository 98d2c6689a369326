//! Domain error types.
//!
//! These errors represent validation failures when constructing contacts.
//! They are distinct from parse and search errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Window bounds are inconsistent
    #[error("invalid window: {0}")]
    InvalidWindow(&'static str),

    /// One-way delay is out of range
    #[error("invalid one-way delay: {0}")]
    InvalidDelay(&'static str),
}
