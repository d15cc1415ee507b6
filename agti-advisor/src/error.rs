/// Failures of the generative backend. Callers of the consultant never see
/// these; they are logged and replaced by a localized fallback message.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("no Gemini API key configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode Gemini response: {0}")]
    Decode(#[from] serde_json::Error),
}
