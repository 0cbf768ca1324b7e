//! Gemini-backed plan generator
//!
//! Sends one `generateContent` request in JSON mode and parses the first
//! candidate's text as an [`ActivePlan`].

use super::prompt::build_prompt;
use super::PlanGenerator;
use crate::config::AiConfig;
use crate::error::GenerationError;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use gym_planner_shared::validation::audit_plan;
use gym_planner_shared::{ActivePlan, Language, UserProfile};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Prefix shared by Google API keys
const API_KEY_PREFIX: &str = "AIza";

/// Quick plausibility check for a configured key
pub fn looks_like_api_key(key: &str) -> bool {
    key.trim().starts_with(API_KEY_PREFIX)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

pub struct GeminiPlanGenerator {
    api_key: SecretString,
    client: Client,
    base_url: String,
    model: String,
}

impl Debug for GeminiPlanGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiPlanGenerator")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiPlanGenerator {
    pub fn new(
        api_key: SecretString,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::new(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            api_key,
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Build from configuration. Fails when no key is configured.
    pub fn from_config(config: &AiConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GenerationError::new("No Gemini API key configured"))?;
        if !looks_like_api_key(api_key.expose_secret()) {
            warn!("Configured Gemini API key does not look like a Google API key");
        }
        Self::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![TextPart { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }

    /// First text part of the first candidate
    fn extract_text(response: GeminiResponse) -> Result<String, GenerationError> {
        if let Some(error) = response.error {
            return Err(GenerationError::new(format!(
                "Gemini API error: {}",
                error.message
            )));
        }
        response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| GenerationError::new("No content in Gemini response"))
    }
}

#[async_trait]
impl PlanGenerator for GeminiPlanGenerator {
    #[instrument(skip(self, profile, language), fields(model = %self.model, language = %language))]
    async fn generate(
        &self,
        profile: &UserProfile,
        language: Language,
    ) -> Result<ActivePlan, GenerationError> {
        let prompt = build_prompt(profile, language, Utc::now().year());
        let request = Self::build_request(prompt);

        debug!("Sending plan request to Gemini API");

        let response = self
            .client
            .post(self.build_url())
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Gemini request failed");
                GenerationError::new(format!("HTTP request failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read Gemini response");
            GenerationError::new(format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(GenerationError::new(format!(
                "Gemini API returned {status}: {body}"
            )));
        }

        let response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            GenerationError::new(format!("Failed to parse Gemini response: {e}"))
        })?;
        let text = Self::extract_text(response).map_err(|e| {
            error!(detail = e.detail(), "Gemini response carried no plan");
            e
        })?;

        let plan: ActivePlan = serde_json::from_str(text.trim()).map_err(|e| {
            error!(error = %e, "Generated plan is not valid JSON");
            GenerationError::new(format!("Failed to parse generated plan: {e}"))
        })?;

        let issues = audit_plan(&plan);
        if !issues.is_empty() {
            warn!(issues = ?issues, "Generated plan has structural issues");
        }
        if plan.week_schedule.len() != usize::from(profile.days) {
            warn!(
                requested = profile.days,
                received = plan.week_schedule.len(),
                "Generated plan has a different number of days than requested"
            );
        }

        debug!(days = plan.week_schedule.len(), "Received plan from Gemini");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_looks_like_api_key() {
        assert!(looks_like_api_key("AIzaSyD-example"));
        assert!(looks_like_api_key("  AIzaSyD-example "));
        assert!(!looks_like_api_key("sk-123"));
        assert!(!looks_like_api_key(""));
    }

    #[test]
    fn test_debug_redacts_key() {
        let generator = GeminiPlanGenerator::new(
            SecretString::new("AIza-very-secret".to_string()),
            "https://example.test/v1beta/",
            "gemini-2.5-flash",
            Duration::from_secs(5),
        )
        .unwrap();
        let debug = format!("{:?}", generator);
        assert!(!debug.contains("very-secret"));
        assert_eq!(
            generator.build_url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_missing_key_is_an_error() {
        assert!(GeminiPlanGenerator::from_config(&AiConfig::default()).is_err());
    }

    #[test]
    fn test_request_uses_json_mode() {
        let request = GeminiPlanGenerator::build_request("hello".to_string());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
                "generationConfig": { "responseMimeType": "application/json" }
            })
        );
    }

    #[test]
    fn test_extract_text_errors() {
        let api_error: GeminiResponse =
            serde_json::from_value(json!({ "error": { "message": "API key not valid" } })).unwrap();
        let err = GeminiPlanGenerator::extract_text(api_error).unwrap_err();
        assert!(err.detail().contains("API key not valid"));

        let empty: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(GeminiPlanGenerator::extract_text(empty).is_err());
    }
}
