use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{GenerationRequest, GenerationResponse, LlmClient};
use crate::error::AdvisorError;

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_2_5_FLASH_ID: &str = "gemini-2.5-flash";

/// Gemini `generateContent` client
pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Content,
    #[serde(default)]
    finish_reason: Option<String>,
}

impl GeminiClient {
    /// A missing key is accepted here and reported on the first call.
    pub fn new(api_key: Option<String>) -> Result<Self, AdvisorError> {
        // No timeout: a consultation waits for as long as the backend takes
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: GEMINI_API_BASE_URL.to_string(),
            client,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

fn build_request_body(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: Some(request.system_instruction.clone()),
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(request.prompt.clone()),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
        },
    }
}

/// Text of the first candidate, all text parts concatenated
fn extract_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            if let Some(reason) = &candidate.finish_reason {
                tracing::debug!(finish_reason = %reason, "Gemini candidate finished");
            }
            candidate
                .content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, AdvisorError> {
        let api_key = self.api_key.as_ref().ok_or(AdvisorError::MissingApiKey)?;
        let body = build_request_body(&request);

        tracing::info!(
            model = %request.model,
            prompt_length = request.prompt.len(),
            system_instruction_length = request.system_instruction.len(),
            "Calling Gemini API"
        );

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                body: raw,
            });
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&raw)?;
        let text = extract_text(decoded);

        tracing::info!(
            model = %request.model,
            response_length = text.len(),
            "Gemini API response received"
        );

        Ok(GenerationResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: GEMINI_2_5_FLASH_ID.to_string(),
            system_instruction: "You are a consultant.".to_string(),
            prompt: "How to fix needle breakage?".to_string(),
            temperature: 0.4,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(build_request_body(&request())).unwrap();

        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a consultant."
        );
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "How to fix needle breakage?"
        );
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let raw = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Check the "}, {"text": "needle size."}]
                    },
                    "finishReason": "STOP"
                },
                {
                    "content": {"role": "model", "parts": [{"text": "ignored"}]}
                }
            ]
        }"#;
        let decoded: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(decoded), "Check the needle size.");
    }

    #[test]
    fn test_extract_text_without_candidates_is_empty() {
        let decoded: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert_eq!(extract_text(decoded), "");

        let decoded: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(extract_text(decoded), "");
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new(Some("key".to_string()))
            .unwrap()
            .with_base_url("http://localhost:9000/");
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let client = GeminiClient::new(Some("   ".to_string())).unwrap();
        assert!(!client.has_api_key());

        let result = client.generate(request()).await;
        assert!(matches!(result, Err(AdvisorError::MissingApiKey)));
    }
}
