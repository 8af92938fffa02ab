//! Error bridging for the standard `Result` ecosystem
//!
//! Validation failures are data, not errors: the core never panics and
//! never returns `Err` for a failed check. This type exists only at the
//! caller boundary, for code that wants to propagate a failed validation
//! with `?`.

use thiserror::Error;

/// A failed validation, flattened into its error messages.
///
/// Produced by [`Validation::into_result`](crate::Validation::into_result).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .errors.join("; "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The flattened error messages, in reporting order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_messages() {
        let err = ValidationError::new(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "validation failed: first; second");
    }

    #[test]
    fn test_exposes_messages() {
        let err = ValidationError::new(vec!["only".into()]);
        assert_eq!(err.errors(), &["only".to_string()]);
    }
}
