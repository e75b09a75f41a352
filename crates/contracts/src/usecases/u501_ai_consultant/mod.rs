//! "Konsultan Berkah": AI chat assistant answering Umrah questions.
//!
//! Prompt building and the generateContent wire format live here; the HTTP
//! call itself is made by the frontend.

pub mod chat;
pub mod config;
pub mod error;
pub mod request;
pub mod response;

pub use chat::{greeting, package_context, system_instruction, ChatMessage, ChatRole};
pub use config::ConsultantConfig;
pub use error::ConsultantError;
pub use request::GenerateContentRequest;
pub use response::GenerateContentResponse;

/// Shown when the model answers with no text
pub const EMPTY_ANSWER_FALLBACK: &str =
    "Maaf, saya sedang mengalami kendala teknis. Silakan hubungi admin kami.";

/// Shown when the request fails for any reason
pub const UNAVAILABLE_FALLBACK: &str =
    "Maaf, layanan konsultasi AI sedang tidak tersedia. Silakan hubungi WhatsApp kami.";

/// Chat bubble text for the outcome of one consultant request
pub fn answer_or_fallback(result: Result<Option<String>, ConsultantError>) -> String {
    match result {
        Ok(Some(text)) => text,
        Ok(None) => EMPTY_ANSWER_FALLBACK.to_string(),
        Err(_) => UNAVAILABLE_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_cover_empty_and_failed_answers() {
        assert_eq!(answer_or_fallback(Ok(Some("Waalaikumsalam".into()))), "Waalaikumsalam");
        assert_eq!(answer_or_fallback(Ok(None)), EMPTY_ANSWER_FALLBACK);
        assert_eq!(
            answer_or_fallback(Err(ConsultantError::Http(503))),
            UNAVAILABLE_FALLBACK
        );
    }
}
