//! The lead form state machine.

use std::sync::Arc;

use generator_core::{EmailDraft, GenerationRequest};

use crate::api::{LeadApi, LeadFields};
use crate::error::{ClientError, Result};

/// The four input fields of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub company_name: String,
    pub contact_name: String,
    pub industry: String,
    pub purpose: String,
}

impl FormFields {
    /// All four fields non-empty (client-side check before generating).
    pub fn is_complete(&self) -> bool {
        self.lead_complete() && !self.purpose.trim().is_empty()
    }

    /// The three lead fields non-empty (client-side check before saving).
    pub fn lead_complete(&self) -> bool {
        !self.company_name.trim().is_empty()
            && !self.contact_name.trim().is_empty()
            && !self.industry.trim().is_empty()
    }
}

/// Where the form currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Collecting input; nothing generated yet.
    Editing,
    /// A draft has been generated and is held for display/save.
    Generated(EmailDraft),
    /// Lead and template were persisted; the held draft has been cleared.
    Saved { lead_id: i64, template_id: i64 },
}

/// Ids reported after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedIds {
    pub lead_id: i64,
    pub template_id: i64,
}

/// The form client state machine.
///
/// One outstanding call at a time: both actions take `&mut self` and are
/// awaited to completion before the next action can start. Failed actions
/// leave the state unchanged and surface the error to the caller.
pub struct LeadForm {
    fields: FormFields,
    state: FormState,
    api: Arc<dyn LeadApi>,
}

impl LeadForm {
    /// Create a new form in the Editing state with empty fields.
    pub fn new(api: Arc<dyn LeadApi>) -> Self {
        Self {
            fields: FormFields::default(),
            state: FormState::Editing,
            api,
        }
    }

    /// Current input fields.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutable access to the input fields.
    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The held draft, if one was generated and not yet saved.
    pub fn draft(&self) -> Option<&EmailDraft> {
        match &self.state {
            FormState::Generated(draft) => Some(draft),
            _ => None,
        }
    }

    /// Generate a draft from the current fields.
    ///
    /// Requires all four fields non-empty; no request is issued otherwise.
    /// A successful generate from any state overwrites the held data.
    pub async fn generate(&mut self) -> Result<EmailDraft> {
        if !self.fields.is_complete() {
            return Err(ClientError::IncompleteForm);
        }

        let request = GenerationRequest::new(
            self.fields.company_name.clone(),
            self.fields.contact_name.clone(),
            self.fields.industry.clone(),
            self.fields.purpose.clone(),
        );

        let draft = self.api.generate_template(&request).await?;
        self.state = FormState::Generated(draft.clone());

        Ok(draft)
    }

    /// Save the lead, then the held template against the returned lead id.
    ///
    /// The two writes are separate requests and not atomic: when the
    /// template save fails the lead still exists, and the error names its
    /// id. The form stays in Generated on any failure.
    pub async fn save(&mut self) -> Result<SavedIds> {
        let draft = match &self.state {
            FormState::Generated(draft) => draft.clone(),
            _ => return Err(ClientError::NoTemplate),
        };

        if !self.fields.lead_complete() {
            return Err(ClientError::MissingLeadFields);
        }

        let lead_fields = LeadFields {
            company_name: self.fields.company_name.clone(),
            contact_name: self.fields.contact_name.clone(),
            industry: self.fields.industry.clone(),
        };
        let lead = self.api.create_lead(&lead_fields).await?;

        match self.api.create_template(lead.id, &draft).await {
            Ok(template) => {
                self.state = FormState::Saved {
                    lead_id: lead.id,
                    template_id: template.id,
                };
                Ok(SavedIds {
                    lead_id: lead.id,
                    template_id: template.id,
                })
            }
            Err(err) => Err(ClientError::TemplateSaveFailed {
                lead_id: lead.id,
                source: Box::new(err),
            }),
        }
    }
}
