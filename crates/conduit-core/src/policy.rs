//! Error-handling policies
//!
//! Live sends must fail loudly; best-effort teardown must not. Each call site
//! picks one of these instead of wrapping calls in ad hoc match blocks.

use std::fmt::Display;
use tracing::error;

/// How a call site treats a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Return the error to the caller
    #[default]
    Propagate,
    /// Log the error and carry on with `None`
    LogAndContinue,
}

impl ErrorPolicy {
    /// Apply the policy to the outcome of `operation`.
    ///
    /// `Ok(Some(value))` on success. On failure, `Propagate` returns the error and
    /// `LogAndContinue` logs it and returns `Ok(None)`.
    pub fn apply<T, E: Display>(
        self,
        operation: &str,
        result: std::result::Result<T, E>,
    ) -> std::result::Result<Option<T>, E> {
        match (self, result) {
            (_, Ok(value)) => Ok(Some(value)),
            (Self::Propagate, Err(e)) => Err(e),
            (Self::LogAndContinue, Err(e)) => {
                error!(operation = %operation, error = %e, "Operation failed, continuing");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_through() {
        let out = ErrorPolicy::LogAndContinue.apply::<_, String>("op", Ok(3));
        assert_eq!(out, Ok(Some(3)));
        let out = ErrorPolicy::Propagate.apply::<_, String>("op", Ok(3));
        assert_eq!(out, Ok(Some(3)));
    }

    #[test]
    fn test_propagate_returns_error() {
        let out = ErrorPolicy::Propagate.apply::<u8, _>("op", Err("boom".to_string()));
        assert_eq!(out, Err("boom".to_string()));
    }

    #[test]
    fn test_log_and_continue_swallows_error() {
        let out = ErrorPolicy::LogAndContinue.apply::<u8, _>("op", Err("boom".to_string()));
        assert_eq!(out, Ok(None));
    }

    #[test]
    fn test_default_is_propagate() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Propagate);
    }
}
