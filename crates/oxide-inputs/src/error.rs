//! Error types for input builders.

use thiserror::Error;

/// Errors raised while configuring input builders.
///
/// These are programming errors: a missing validation entry or an enum value
/// that matches no variant is a normal case and never produces an error.
#[derive(Debug, Error)]
pub enum InputError {
    /// The element or property name is empty.
    #[error("input name must not be empty")]
    EmptyName,

    /// The name is not a member path such as `Price` or `Items[0].Name`.
    #[error("invalid input name: {0:?}")]
    InvalidName(String),

    /// Unknown input kind.
    #[error("unsupported input kind: {0}")]
    UnsupportedKind(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for input operations.
pub type Result<T> = std::result::Result<T, InputError>;
