//! Input and output types for email generation.

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// A request to generate a cold-email draft for a lead.
///
/// All four fields are required and must be non-empty after trimming;
/// [`GenerationRequest::validate`] enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Company the lead works at.
    pub company_name: String,
    /// Name of the contact person.
    pub contact_name: String,
    /// Industry the company operates in.
    pub industry: String,
    /// Purpose of the email (e.g., "introduce our product").
    pub purpose: String,
}

impl GenerationRequest {
    /// Create a new generation request.
    pub fn new(
        company_name: impl Into<String>,
        contact_name: impl Into<String>,
        industry: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            contact_name: contact_name.into(),
            industry: industry.into(),
            purpose: purpose.into(),
        }
    }

    /// Validate that every field is non-empty after trimming.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (field, value) in [
            ("company_name", &self.company_name),
            ("contact_name", &self.contact_name),
            ("industry", &self.industry),
            ("purpose", &self.purpose),
        ] {
            if value.trim().is_empty() {
                return Err(GeneratorError::InvalidInput(format!(
                    "{} must be non-empty",
                    field
                )));
            }
        }

        Ok(())
    }
}

/// A generated email draft: a subject line and a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    /// Subject line.
    pub subject: String,
    /// Email body.
    pub body: String,
}

impl EmailDraft {
    /// Create a new draft.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_request() {
        let request = GenerationRequest::new("Acme", "Jane Doe", "Retail", "introduce our product");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let blank_cases = [
            GenerationRequest::new("", "Jane", "Retail", "intro"),
            GenerationRequest::new("Acme", "   ", "Retail", "intro"),
            GenerationRequest::new("Acme", "Jane", "", "intro"),
            GenerationRequest::new("Acme", "Jane", "Retail", "\t\n"),
        ];

        for request in blank_cases {
            let err = request.validate().unwrap_err();
            assert!(matches!(err, GeneratorError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_validate_names_offending_field() {
        let request = GenerationRequest::new("Acme", "", "Retail", "intro");
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("contact_name"));
    }
}
