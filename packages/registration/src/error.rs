//! Error types for validation and registration

use thiserror::Error;

use crate::fields::Field;

/// Which rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A required field was empty after trimming
    Missing,
    /// Trimmed length above the field's bound
    TooLong,
    /// Trimmed value does not match the field's pattern
    BadFormat,
}

/// The first rule that failed during one submit attempt.
///
/// `fields` holds every input to mark invalid: all empty required inputs
/// for [`Violation::Missing`], otherwise the single offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub fields: Vec<Field>,
    pub violation: Violation,
    pub message: &'static str,
}

/// Errors that can occur while calling the registration service
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by a server function or another transport
    #[error("Server error: {0}")]
    Server(String),
}
