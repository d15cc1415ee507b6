use shared_types::Language;

/// Shown when the model answered with no text
pub fn empty_response(language: Language) -> &'static str {
    match language {
        Language::Id => "Maaf, saya tidak dapat memberikan konsultasi saat ini.",
        Language::En => "Sorry, I cannot provide consultation at this moment.",
    }
}

/// Shown when the call to the model failed for any reason
pub fn request_failed(language: Language) -> &'static str {
    match language {
        Language::Id => "Terjadi kesalahan saat menghubungi sistem AI. Pastikan API Key valid.",
        Language::En => "An error occurred while contacting the AI system. Please check your API Key.",
    }
}
