//! Error types for the form client.

use thiserror::Error;

/// Errors that can occur in the form client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A generate action was attempted with an incomplete form.
    #[error("Please fill all fields.")]
    IncompleteForm,

    /// A save action was attempted with a blank lead field.
    #[error("Please ensure all lead fields are filled.")]
    MissingLeadFields,

    /// A save action was attempted with no generated template held.
    #[error("No template available to save. Please generate a template first.")]
    NoTemplate,

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error status; detail is surfaced verbatim.
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// The lead was created but saving its template failed. The partial
    /// write is user-visible, not hidden.
    #[error("Lead {lead_id} was saved, but saving the template failed: {source}")]
    TemplateSaveFailed {
        lead_id: i64,
        #[source]
        source: Box<ClientError>,
    },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
