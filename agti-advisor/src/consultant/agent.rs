use shared_types::{Company, Language};
use std::sync::Arc;

use super::fallback;
use super::system_prompt::{build_member_context, build_system_prompt};
use super::types::{Advice, AdviceStatus};
use crate::client::{GenerationRequest, LlmClient};
use crate::error::AdvisorError;
use crate::gemini::GEMINI_2_5_FLASH_ID;

pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Industry consultant backed by a generative model and grounded on the
/// member registry for partner matching.
pub struct ConsultantAgent<'a> {
    llm_client: Arc<dyn LlmClient>,
    companies: &'a [Company],
    model: String,
    temperature: f32,
}

impl<'a> ConsultantAgent<'a> {
    pub fn new(llm_client: Arc<dyn LlmClient>, companies: &'a [Company]) -> Self {
        Self {
            llm_client,
            companies,
            model: GEMINI_2_5_FLASH_ID.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Answer `query` in `language`. Never fails: problems with the backend
    /// come back as a localized fallback message.
    pub async fn advise(&self, query: &str, language: Language) -> String {
        self.consult(query, language).await.text
    }

    /// Like [`advise`](Self::advise) but also reports how the answer came about.
    pub async fn consult(&self, query: &str, language: Language) -> Advice {
        if query.trim().is_empty() {
            return Advice {
                status: AdviceStatus::Skipped,
                text: String::new(),
            };
        }

        match self.request(query, language).await {
            Ok(text) if !text.is_empty() => Advice {
                status: AdviceStatus::Answered,
                text,
            },
            Ok(_) => {
                tracing::warn!(model = %self.model, "Gemini returned an empty response");
                Advice {
                    status: AdviceStatus::Empty,
                    text: fallback::empty_response(language).to_string(),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, model = %self.model, "Gemini API error");
                Advice {
                    status: AdviceStatus::Failed,
                    text: fallback::request_failed(language).to_string(),
                }
            }
        }
    }

    async fn request(&self, query: &str, language: Language) -> Result<String, AdvisorError> {
        let member_context = build_member_context(self.companies)?;
        let system_instruction = build_system_prompt(&member_context, language);

        let request = GenerationRequest {
            model: self.model.clone(),
            system_instruction,
            prompt: query.to_string(),
            temperature: self.temperature,
        };

        let response = self.llm_client.generate(request).await?;
        Ok(response.text)
    }
}
