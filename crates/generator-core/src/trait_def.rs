//! The EmailGenerator trait definition.

use async_trait::async_trait;

use crate::error::GeneratorError;
use crate::types::{EmailDraft, GenerationRequest};

/// A trait for turning a structured generation request into an email draft.
///
/// Implementations can range from test mocks to full AI backends. This trait
/// is object-safe and can be used with `Arc<dyn EmailGenerator>`.
#[async_trait]
pub trait EmailGenerator: Send + Sync {
    /// Generate an email draft for the given request.
    ///
    /// Returns an [`EmailDraft`] with a subject and body, or an error if
    /// generation failed. Implementations make a single attempt; retry and
    /// caching are out of scope.
    async fn generate(&self, request: &GenerationRequest) -> Result<EmailDraft, GeneratorError>;

    /// Get a human-readable name for this generator implementation.
    fn name(&self) -> &str;
}
