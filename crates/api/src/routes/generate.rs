//! Template generation route.

use axum::extract::State;
use axum::Json;
use generator_core::{EmailGenerator, GenerationRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;

/// Request to generate an email template.
///
/// All four fields are required; the JSON extractor rejects payloads with
/// missing fields before this handler runs, so no upstream call is made for
/// malformed input.
#[derive(Debug, Deserialize)]
pub struct GenerateTemplateRequest {
    pub company_name: String,
    pub contact_name: String,
    pub industry: String,
    pub purpose: String,
}

/// A generated subject/body pair. Nothing is persisted by this operation.
#[derive(Debug, Serialize)]
pub struct GenerateTemplateResponse {
    pub subject: String,
    pub body: String,
}

/// Generate an email template for a lead.
pub async fn generate_template(
    State(state): State<AppState>,
    Json(req): Json<GenerateTemplateRequest>,
) -> Result<Json<GenerateTemplateResponse>> {
    debug!(company = %req.company_name, "Received generate_template request");

    let request = GenerationRequest::new(
        req.company_name,
        req.contact_name,
        req.industry,
        req.purpose,
    );

    let draft = state.generator.generate(&request).await?;

    Ok(Json(GenerateTemplateResponse {
        subject: draft.subject,
        body: draft.body,
    }))
}
