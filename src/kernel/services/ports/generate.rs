#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid API key. Please check your Gemini API key configuration.")]
    InvalidApiKey,

    #[error("API quota exceeded. Please try again later.")]
    QuotaExceeded,

    #[error("No code was generated. Please try a different prompt.")]
    Empty,

    #[error("Failed to generate code: {0}")]
    Upstream(String),

    #[error("Failed to generate code. Please try again with a more specific prompt.")]
    Unknown,
}

impl GenerateError {
    /// Best-effort classifier for free-text upstream failures. The remote
    /// service only reports prose, so substring matching is the contract
    /// we actually have.
    pub fn classify(message: &str) -> Self {
        if message.is_empty() {
            Self::Unknown
        } else if message.contains("API key") {
            Self::InvalidApiKey
        } else if message.contains("quota") {
            Self::QuotaExceeded
        } else {
            Self::Upstream(message.to_string())
        }
    }
}
