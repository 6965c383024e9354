//! Lead creation route.

use axum::extract::State;
use axum::Json;
use database::models::{Lead, NewLead};
use serde::Deserialize;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to create a lead. All fields required and non-blank after trimming.
#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    pub company_name: String,
    pub contact_name: String,
    pub industry: String,
}

/// Create a new lead.
///
/// Validation runs before any write; on unexpected store failure the insert
/// is rolled back and reported as a server error.
pub async fn create_lead(
    State(state): State<AppState>,
    Json(req): Json<CreateLeadRequest>,
) -> Result<Json<Lead>> {
    if req.company_name.trim().is_empty()
        || req.contact_name.trim().is_empty()
        || req.industry.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "All fields (company_name, contact_name, industry) must be non-empty".to_string(),
        ));
    }

    let new = NewLead {
        company_name: req.company_name,
        contact_name: req.contact_name,
        industry: req.industry,
    };
    let lead = database::lead::create_lead(state.db.pool(), &new).await?;

    info!(lead_id = lead.id, company = %lead.company_name, "Created lead");

    Ok(Json(lead))
}
