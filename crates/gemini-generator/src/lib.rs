//! Gemini-based email template generator.
//!
//! Implements the [`generator_core::EmailGenerator`] trait against Google's
//! Gemini `generateContent` REST API. The adapter builds a single prompt from
//! the request fields, makes one API call, and splits the returned text into
//! a subject/body draft. No retries, no caching, no streaming.

mod api_types;
mod config;
mod generator;

pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};
pub use generator::GeminiGenerator;
