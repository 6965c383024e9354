//! Root discovery endpoint.

use axum::Json;
use serde::Serialize;

/// Static description of the service and its operations.
#[derive(Debug, Serialize)]
pub struct Description {
    pub message: String,
    pub version: String,
    pub status: String,
    pub endpoints: Endpoints,
}

/// Available operations, keyed by name.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub generate_template: String,
    pub leads: String,
    pub templates: String,
}

/// Describe the API. Informational only.
pub async fn describe() -> Json<Description> {
    Json(Description {
        message: "LeadGen Email Assistant API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints: Endpoints {
            generate_template: "POST /generate_template - Generate email templates using AI"
                .to_string(),
            leads: "POST /leads - Create new leads".to_string(),
            templates: "POST /templates - Save generated templates".to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_describe_lists_all_operations() {
        let Json(description) = describe().await;

        assert_eq!(description.message, "LeadGen Email Assistant API");
        assert_eq!(description.status, "running");
        assert!(description.endpoints.generate_template.contains("/generate_template"));
        assert!(description.endpoints.leads.contains("/leads"));
        assert!(description.endpoints.templates.contains("/templates"));
    }
}
