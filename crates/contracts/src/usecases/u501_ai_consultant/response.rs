use super::request::Content;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate joined together; `None` when blank
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [ { "text": "Wa'alaikumussalam. " }, { "text": "Paket VIP Rp 35.000.000." } ] },
                  "finishReason": "STOP" },
                { "content": { "role": "model", "parts": [ { "text": "ignored" } ] } }
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            resp.text().as_deref(),
            Some("Wa'alaikumussalam. Paket VIP Rp 35.000.000.")
        );
    }

    #[test]
    fn missing_or_blank_text_is_none() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), None);

        let blank: GenerateContentResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [ { "text": "  " } ] } } ] }"#,
        )
        .unwrap();
        assert_eq!(blank.text(), None);

        let blocked: GenerateContentResponse =
            serde_json::from_str(r#"{ "candidates": [ { "finishReason": "SAFETY" } ] }"#).unwrap();
        assert_eq!(blocked.text(), None);
    }
}
