use async_trait::async_trait;

use crate::error::AdvisorError;

/// A single text-generation exchange
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    /// The user's question, passed through untouched
    pub prompt: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationResponse {
    /// Generated text, empty when the model produced nothing
    pub text: String,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: GenerationRequest)
        -> Result<GenerationResponse, AdvisorError>;
}
