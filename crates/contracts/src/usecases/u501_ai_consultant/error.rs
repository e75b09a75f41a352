use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsultantError {
    #[error("AI API key is not configured")]
    MissingApiKey,
    #[error("AI service responded with HTTP {0}")]
    Http(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("cannot decode AI response: {0}")]
    Decode(String),
}
