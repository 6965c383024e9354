//! LeadGen API client.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use generator_core::{EmailDraft, GenerationRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Lead fields sent to `POST /leads`.
#[derive(Debug, Clone, Serialize)]
pub struct LeadFields {
    pub company_name: String,
    pub contact_name: String,
    pub industry: String,
}

/// A persisted lead as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedLead {
    pub id: i64,
    pub company_name: String,
    pub contact_name: String,
    pub industry: String,
    pub created_at: String,
}

/// A persisted template as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedTemplate {
    pub id: i64,
    pub lead_id: i64,
    pub subject: String,
    pub body: String,
    pub generated_at: String,
}

/// Body sent to `POST /templates`.
#[derive(Debug, Serialize)]
struct TemplatePayload<'a> {
    lead_id: i64,
    subject: &'a str,
    body: &'a str,
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// The three API operations the form drives.
///
/// This trait is object-safe and can be used with `Arc<dyn LeadApi>`; tests
/// substitute a scripted implementation for the HTTP client.
#[async_trait]
pub trait LeadApi: Send + Sync {
    /// Request a generated email draft for the given lead details.
    async fn generate_template(&self, request: &GenerationRequest) -> Result<EmailDraft>;

    /// Persist a lead; returns the stored row including its new id.
    async fn create_lead(&self, lead: &LeadFields) -> Result<SavedLead>;

    /// Persist a template against an existing lead.
    async fn create_template(&self, lead_id: i64, draft: &EmailDraft) -> Result<SavedTemplate>;
}

/// HTTP client for the LeadGen API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LEADGEN_API_URL` | API base URL | `http://127.0.0.1:8000` |
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("LEADGEN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// POST a JSON body and decode a JSON response, translating error
    /// statuses into [`ClientError::Api`] with the service's detail message.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.detail)
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LeadApi for ApiClient {
    async fn generate_template(&self, request: &GenerationRequest) -> Result<EmailDraft> {
        self.post_json("/generate_template", request).await
    }

    async fn create_lead(&self, lead: &LeadFields) -> Result<SavedLead> {
        self.post_json("/leads", lead).await
    }

    async fn create_template(&self, lead_id: i64, draft: &EmailDraft) -> Result<SavedTemplate> {
        let payload = TemplatePayload {
            lead_id,
            subject: &draft.subject,
            body: &draft.body,
        };
        self.post_json("/templates", &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Invalid lead_id: 999999"}"#).unwrap();
        assert_eq!(body.detail, "Invalid lead_id: 999999");
    }

    #[test]
    fn test_template_payload_shape() {
        let draft = EmailDraft::new("Quick question", "Hi Jane,");
        let payload = TemplatePayload {
            lead_id: 7,
            subject: &draft.subject,
            body: &draft.body,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "lead_id": 7,
                "subject": "Quick question",
                "body": "Hi Jane,"
            })
        );
    }
}
