//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A prospective contact/company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Lead {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Company the lead works at.
    pub company_name: String,
    /// Name of the contact person.
    pub contact_name: String,
    /// Industry the company operates in.
    pub industry: String,
    /// Server-assigned creation timestamp.
    pub created_at: String,
}

/// A generated cold-email subject/body pair associated with a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Template {
    /// Auto-incrementing ID.
    pub id: i64,
    /// ID of the lead this template belongs to.
    pub lead_id: i64,
    /// Subject line.
    pub subject: String,
    /// Email body.
    pub body: String,
    /// Server-assigned generation timestamp.
    pub generated_at: String,
}

/// Input for creating a lead; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub company_name: String,
    pub contact_name: String,
    pub industry: String,
}

/// Input for creating a template; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTemplate {
    pub lead_id: i64,
    pub subject: String,
    pub body: String,
}
