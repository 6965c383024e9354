//! Core trait and types for email template generation.
//!
//! This crate provides the shared interface for all generator implementations
//! in the LeadGen assistant. It defines:
//!
//! - [`EmailGenerator`] - The trait that all generator implementations must implement
//! - [`GenerationRequest`] / [`EmailDraft`] - Input and output types
//! - [`GeneratorError`] - Error types for generation operations
//! - [`build_prompt`] / [`parse_draft`] - Prompt construction and output parsing
//!
//! # Example
//!
//! ```rust
//! use generator_core::{EmailGenerator, EmailDraft, GenerationRequest, GeneratorError};
//! use async_trait::async_trait;
//!
//! struct MyGenerator;
//!
//! #[async_trait]
//! impl EmailGenerator for MyGenerator {
//!     async fn generate(&self, _request: &GenerationRequest) -> Result<EmailDraft, GeneratorError> {
//!         Ok(EmailDraft::new("Hello", "A short introduction."))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyGenerator"
//!     }
//! }
//! ```

mod error;
mod parse;
mod prompt;
mod trait_def;
mod types;

pub use error::GeneratorError;
pub use parse::{parse_draft, DEFAULT_SUBJECT, SUBJECT_MARKER};
pub use prompt::build_prompt;
pub use trait_def::EmailGenerator;
pub use types::{EmailDraft, GenerationRequest};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
