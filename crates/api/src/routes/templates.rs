//! Template creation route.

use axum::extract::State;
use axum::Json;
use database::models::{NewTemplate, Template};
use serde::Deserialize;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to save a generated template against an existing lead.
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub lead_id: i64,
    pub subject: String,
    pub body: String,
}

/// Create a new template.
///
/// The referenced lead must exist at the moment of creation; that check and
/// the blank-field validation both run before any write.
pub async fn create_template(
    State(state): State<AppState>,
    Json(req): Json<CreateTemplateRequest>,
) -> Result<Json<Template>> {
    let pool = state.db.pool();

    if !database::lead::lead_exists(pool, req.lead_id).await? {
        return Err(ApiError::UnknownLead(req.lead_id));
    }

    if req.subject.trim().is_empty() || req.body.trim().is_empty() {
        return Err(ApiError::Validation(
            "Subject and body must be non-empty".to_string(),
        ));
    }

    let new = NewTemplate {
        lead_id: req.lead_id,
        subject: req.subject,
        body: req.body,
    };
    let template = database::template::create_template(pool, &new).await?;

    info!(
        template_id = template.id,
        lead_id = template.lead_id,
        "Created template"
    );

    Ok(Json(template))
}
