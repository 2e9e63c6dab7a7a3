//! Entry-point errors.
//!
//! Rule failures are never errors — they land in the
//! [`Report`](crate::Report). [`ValidateError`] covers the one hard failure:
//! handing the checked entry point something that is not a record.

/// Errors from [`validate_value`](crate::validate_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    /// The input value was not a record.
    #[error("cannot validate a non-record value (got {kind})")]
    InvalidInput {
        /// The kind of value that was passed instead.
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ValidateError::InvalidInput { kind: "list" };
        assert_eq!(
            err.to_string(),
            "cannot validate a non-record value (got list)"
        );
    }
}
