//! Error types for generator operations.

use thiserror::Error;

/// Errors that can occur during email template generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration error (missing API key, bad client setup).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid generation input (blank required field).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error reaching the generation service.
    #[error("Network error: {0}")]
    Network(String),

    /// The generation service returned a failure or unusable output.
    #[error("Error generating template: {0}")]
    GenerationFailed(String),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
