pub mod client;
pub mod consultant;
pub mod error;
pub mod gemini;

pub use client::{GenerationRequest, GenerationResponse, LlmClient};
pub use consultant::{Advice, AdviceStatus, ConsultantAgent, DEFAULT_TEMPERATURE};
pub use error::AdvisorError;
pub use gemini::{GeminiClient, GEMINI_2_5_FLASH_ID};
