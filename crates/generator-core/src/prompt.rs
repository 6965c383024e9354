//! Prompt construction for the generation service.

use crate::types::GenerationRequest;

/// Build the natural-language instruction sent to the generation model.
///
/// Embeds all four request fields in a single sentence. The model is expected
/// (but not guaranteed) to answer with a `Subject:` line followed by the body;
/// see [`crate::parse_draft`] for how the output is interpreted.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "Generate a cold email with subject and body for {} at {} in the {} industry. The purpose is {}.",
        request.contact_name, request.company_name, request.industry, request.purpose
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_all_fields() {
        let request = GenerationRequest::new("Acme", "Jane Doe", "Retail", "introduce our product");
        let prompt = build_prompt(&request);

        assert_eq!(
            prompt,
            "Generate a cold email with subject and body for Jane Doe at Acme in the Retail industry. The purpose is introduce our product."
        );
    }
}
