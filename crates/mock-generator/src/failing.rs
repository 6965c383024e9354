//! Failing generator - always returns an error.

use async_trait::async_trait;
use generator_core::{EmailDraft, EmailGenerator, GenerationRequest, GeneratorError};

/// A generator that fails every request with a fixed message.
///
/// Useful for testing error translation in the API layer.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    /// Create a new FailingGenerator with the given failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::new("generation unavailable")
    }
}

#[async_trait]
impl EmailGenerator for FailingGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<EmailDraft, GeneratorError> {
        Err(GeneratorError::GenerationFailed(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingGenerator"
    }
}
