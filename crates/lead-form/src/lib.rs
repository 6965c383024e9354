//! Form client for the LeadGen email assistant.
//!
//! This crate provides the client side of the assistant:
//!
//! - [`LeadApi`] - Trait over the three API operations, with the
//!   `reqwest`-backed [`ApiClient`] as the production implementation
//! - [`LeadForm`] - The typed form state machine (Editing, Generated, Saved)
//! - [`ClientError`] - Error types, surfacing service details verbatim
//!
//! All state lives in the [`LeadForm`] value passed through the UI layer;
//! there is no ambient global state and no local persistence.

mod api;
mod error;
mod form;

pub use api::{ApiClient, LeadApi, LeadFields, SavedLead, SavedTemplate};
pub use error::{ClientError, Result};
pub use form::{FormFields, FormState, LeadForm, SavedIds};

// Re-export the shared draft/request types for convenience
pub use generator_core::{EmailDraft, GenerationRequest};
