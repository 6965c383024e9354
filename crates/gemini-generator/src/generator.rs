//! GeminiGenerator implementation using the Gemini REST API.

use generator_core::{
    async_trait, build_prompt, parse_draft, EmailDraft, EmailGenerator, GenerationRequest,
    GeneratorError,
};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ApiError, GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;

/// A generator implementation that uses Google's Gemini API.
///
/// Makes a single `generateContent` call per request and splits the returned
/// text into a subject/body draft. Any failure of the call (network, quota,
/// malformed response) is reported as a generation failure; nothing is
/// persisted by this adapter.
pub struct GeminiGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGenerator {
    /// Create a new GeminiGenerator with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder().build().map_err(|e| {
            GeneratorError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!("GeminiGenerator initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a GeminiGenerator from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// The full `generateContent` endpoint URL for the configured model.
    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }

    /// Make a generateContent request and return the raw model text.
    async fn generate_content(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = self.request_url();
        let request = GenerateContentRequest::from_prompt(prompt);

        debug!("Sending request to Gemini API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(GeneratorError::GenerationFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(GeneratorError::GenerationFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            GeneratorError::GenerationFailed(format!("Failed to parse response: {}", e))
        })?;

        debug!("Received response from Gemini API: {:?}", completion);

        let text = completion
            .first_candidate_text()
            .ok_or_else(|| GeneratorError::GenerationFailed("No candidates in response".to_string()))?;

        if text.trim().is_empty() {
            return Err(GeneratorError::GenerationFailed(
                "Empty response from model".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl EmailGenerator for GeminiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<EmailDraft, GeneratorError> {
        debug!(
            "Generating template for {} at {}",
            request.contact_name, request.company_name
        );

        let prompt = build_prompt(request);
        let text = self.generate_content(&prompt).await?;
        let draft = parse_draft(&text);

        info!(
            company = %request.company_name,
            subject = %draft.subject,
            "Generated email template"
        );

        Ok(draft)
    }

    fn name(&self) -> &str {
        "GeminiGenerator"
    }
}
