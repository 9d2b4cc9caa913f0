//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors; adapter errors are boxed into
//! [`CatalogError::Source`] so the domain never names an adapter type.

/// Top-level error for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The remote tabular source failed (transport, status, or decoding).
    #[error("remote source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants on catalog items.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The item id is empty.
    #[error("item id must not be empty")]
    EmptyId,

    /// The registry code is empty.
    #[error("registry code must not be empty")]
    EmptyCode,

    /// The cost is negative or not a finite number.
    #[error("cost must be a non-negative finite number")]
    InvalidCost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error() {
        let err: CatalogError = ValidationError::EmptyId.into();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::EmptyId)
        ));
    }

    #[test]
    fn should_expose_boxed_source_error() {
        let inner = std::io::Error::other("connection reset");
        let err = CatalogError::Source(Box::new(inner));
        assert_eq!(err.to_string(), "remote source error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
