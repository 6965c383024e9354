//! Mock generator implementations for testing.
//!
//! This crate provides mock implementations of the `EmailGenerator` trait:
//! - `ScriptedGenerator` - Returns a fixed draft
//! - `RawTextGenerator` - Runs a fixed raw model output through the shared parser
//! - `FailingGenerator` - Always fails with a given message
//!
//! For production AI generation, use the `gemini-generator` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{EmailGenerator, GenerationRequest, ScriptedGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_generator::GeneratorError> {
//!     let generator = ScriptedGenerator::new("Quick question", "Hi Jane,");
//!     let request = GenerationRequest::new("Acme", "Jane Doe", "Retail", "intro");
//!
//!     let draft = generator.generate(&request).await?;
//!     println!("Subject: {}", draft.subject);
//!     Ok(())
//! }
//! ```

mod failing;
mod raw_text;
mod scripted;

// Re-export generator-core types for convenience
pub use generator_core::{
    async_trait, EmailDraft, EmailGenerator, GenerationRequest, GeneratorError,
};

pub use failing::FailingGenerator;
pub use raw_text::RawTextGenerator;
pub use scripted::ScriptedGenerator;
