//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::collections::TryReserveError;
use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Standard input ended before a value could be read.
    #[error("Input Error: no more input")]
    InputClosed,

    /// A token was read but it does not parse as an integer.
    #[error("Input Error: '{0}' is not an integer")]
    NotAnInteger(String),

    /// An integer was read but falls outside the accepted range.
    #[error("Input Error: {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// A fallible heap reservation was refused.
    #[error("Allocation Error: {0}")]
    Alloc(#[from] TryReserveError),

    /// Writing into a fixed-capacity buffer would overrun it.
    #[error("Capacity Error: need {needed} bytes, buffer holds {capacity}")]
    Capacity { needed: usize, capacity: usize },
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---
// Arc is used for non-Clone error types.

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl AppError {
    /// True for errors caused by what the user typed rather than by the terminal or allocator.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            AppError::InputClosed | AppError::NotAnInteger(_) | AppError::OutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_and_clones() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        let copy = err.clone();
        assert!(copy.to_string().contains("gone"));
        assert!(!copy.is_input());
    }

    #[test]
    fn test_input_errors_are_classified() {
        assert!(AppError::InputClosed.is_input());
        assert!(AppError::NotAnInteger("abc".to_string()).is_input());
        let range = AppError::OutOfRange {
            value: 21,
            min: 0,
            max: 20,
        };
        assert!(range.is_input());
        assert_eq!(range.to_string(), "Input Error: 21 is outside 0..=20");
    }
}
