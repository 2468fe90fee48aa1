// src/services/ai_service.rs
// DOCUMENTATION: Content generation via the hosted LLM
// PURPOSE: Fixed prompt templates, response cleanup and JSON mapping for
// the /api/auth/ai-generate endpoints

use crate::errors::CmsError;
use crate::models::{GeneratedCity, GeneratedHighlight, GeneratedPackage};
use crate::services::TextGenClient;
use serde_json::Value;

pub struct AiService;

impl AiService {
    /// Generate city drafts for a destination
    /// DOCUMENTATION: Used by POST /api/auth/ai-generate/cities
    pub async fn generate_cities(
        client: &TextGenClient,
        destination_name: &str,
    ) -> Result<Vec<GeneratedCity>, CmsError> {
        let prompt = Self::cities_prompt(destination_name);
        let raw = client.generate(&prompt).await?;
        let cleaned = Self::strip_code_fences(&raw);

        let cities: Vec<GeneratedCity> = serde_json::from_str(&cleaned).map_err(|e| {
            log::error!("Model returned invalid city JSON: {}", e);
            CmsError::ExternalApiError(format!("Model returned invalid JSON: {}", e))
        })?;

        log::info!(
            "Generated {} city drafts for '{}'",
            cities.len(),
            destination_name
        );
        Ok(cities)
    }

    /// Generate highlight drafts for a destination
    /// DOCUMENTATION: Used by POST /api/auth/ai-generate/highlights
    /// The model sometimes answers with plain strings and sometimes with
    /// objects, so elements are mapped individually
    pub async fn generate_highlights(
        client: &TextGenClient,
        destination_name: &str,
    ) -> Result<Vec<GeneratedHighlight>, CmsError> {
        let prompt = Self::highlights_prompt(destination_name);
        let raw = client.generate(&prompt).await?;
        let cleaned = Self::strip_code_fences(&raw);

        let values: Vec<Value> = serde_json::from_str(&cleaned).map_err(|e| {
            log::error!("Model returned invalid highlight JSON: {}", e);
            CmsError::ExternalApiError(format!("Model returned invalid JSON: {}", e))
        })?;

        let highlights: Vec<GeneratedHighlight> = values
            .iter()
            .filter_map(Self::highlight_label)
            .map(|label| GeneratedHighlight { label })
            .collect();

        if highlights.is_empty() {
            log::error!("Model highlight array contained no usable entries");
            return Err(CmsError::ExternalApiError(
                "Model returned no usable highlights".to_string(),
            ));
        }

        log::info!(
            "Generated {} highlight drafts for '{}'",
            highlights.len(),
            destination_name
        );
        Ok(highlights)
    }

    /// Generate package drafts for a destination
    /// DOCUMENTATION: Used by POST /api/auth/ai-generate/packages
    pub async fn generate_packages(
        client: &TextGenClient,
        destination_name: &str,
    ) -> Result<Vec<GeneratedPackage>, CmsError> {
        let prompt = Self::packages_prompt(destination_name);
        let raw = client.generate(&prompt).await?;
        let cleaned = Self::strip_code_fences(&raw);

        let packages: Vec<GeneratedPackage> = serde_json::from_str(&cleaned).map_err(|e| {
            log::error!("Model returned invalid package JSON: {}", e);
            CmsError::ExternalApiError(format!("Model returned invalid JSON: {}", e))
        })?;

        log::info!(
            "Generated {} package drafts for '{}'",
            packages.len(),
            destination_name
        );
        Ok(packages)
    }

    /// Prompt template for city generation
    fn cities_prompt(destination_name: &str) -> String {
        format!(
            "List 6 cities or towns that travelers visit in {}. \
            Respond with a JSON array only, no prose, where each element is \
            {{\"name\": \"...\", \"description\": \"...\"}} and the description \
            is one sentence of 15-25 words written for a travel brochure.",
            destination_name
        )
    }

    /// Prompt template for highlight generation
    fn highlights_prompt(destination_name: &str) -> String {
        format!(
            "List 8 trip highlights for a tour of {}. \
            Respond with a JSON array only, no prose, where each element is \
            {{\"label\": \"...\"}} and the label is a short phrase of at most \
            10 words naming one experience or sight.",
            destination_name
        )
    }

    /// Prompt template for package generation
    fn packages_prompt(destination_name: &str) -> String {
        format!(
            "Draft 3 tour packages for {}. \
            Respond with a JSON array only, no prose, where each element is \
            {{\"name\": \"...\", \"description\": \"...\", \"duration_days\": N, \
            \"duration_nights\": N, \"price\": N}}. Prices are per person in USD, \
            durations between 3 and 14 days, nights one less than days.",
            destination_name
        )
    }

    /// Remove markdown code fences from a model response
    /// DOCUMENTATION: Models frequently wrap JSON in ```json ... ``` even
    /// when told not to; everything else is left untouched
    fn strip_code_fences(text: &str) -> String {
        text.replace("```json", "").replace("```", "").trim().to_string()
    }

    /// Pull a label out of one highlight array element
    /// DOCUMENTATION: Accepts "Sunrise hike" as well as {"label": "Sunrise hike"}
    /// and the {"highlight": ...} / {"text": ...} spellings seen in practice
    fn highlight_label(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Object(map) => ["label", "highlight", "text"]
                .iter()
                .find_map(|key| map.get(*key))
                .and_then(|v| v.as_str())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_code_fences_plain_json() {
        let input = r#"[{"name": "Ubud", "description": "Arts town."}]"#;
        assert_eq!(AiService::strip_code_fences(input), input);
    }

    #[test]
    fn test_strip_code_fences_json_fence() {
        let input = "```json\n[{\"label\": \"Sunrise hike\"}]\n```";
        assert_eq!(
            AiService::strip_code_fences(input),
            "[{\"label\": \"Sunrise hike\"}]"
        );
    }

    #[test]
    fn test_strip_code_fences_bare_fence() {
        let input = "```\n[1, 2, 3]\n```";
        assert_eq!(AiService::strip_code_fences(input), "[1, 2, 3]");
    }

    #[test]
    fn test_strip_code_fences_surrounding_whitespace() {
        let input = "\n\n```json\n[]\n```\n\n";
        assert_eq!(AiService::strip_code_fences(input), "[]");
    }

    #[test]
    fn test_stripped_output_parses() {
        let input = "```json\n[{\"name\": \"Kuta\", \"description\": \"Beach town.\"}]\n```";
        let cleaned = AiService::strip_code_fences(input);
        let cities: Vec<GeneratedCity> = serde_json::from_str(&cleaned).unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Kuta");
    }

    #[test]
    fn test_highlight_label_from_string() {
        assert_eq!(
            AiService::highlight_label(&json!("Sunrise volcano hike")),
            Some("Sunrise volcano hike".to_string())
        );
        assert_eq!(AiService::highlight_label(&json!("   ")), None);
    }

    #[test]
    fn test_highlight_label_from_object() {
        assert_eq!(
            AiService::highlight_label(&json!({"label": "Temple visit"})),
            Some("Temple visit".to_string())
        );
        assert_eq!(
            AiService::highlight_label(&json!({"highlight": "Rice terraces"})),
            Some("Rice terraces".to_string())
        );
        assert_eq!(
            AiService::highlight_label(&json!({"text": "Night market"})),
            Some("Night market".to_string())
        );
        assert_eq!(AiService::highlight_label(&json!({"other": "x"})), None);
        assert_eq!(AiService::highlight_label(&json!(42)), None);
    }

    #[test]
    fn test_prompts_mention_destination() {
        assert!(AiService::cities_prompt("Bali").contains("Bali"));
        assert!(AiService::highlights_prompt("Bali").contains("Bali"));
        assert!(AiService::packages_prompt("Bali").contains("Bali"));
    }
}
