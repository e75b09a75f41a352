use super::chat::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};

/// Body of a `models/{model}:generateContent` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

impl Content {
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&ChatMessage> for Content {
    fn from(msg: &ChatMessage) -> Self {
        let role = match msg.role {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        };
        Content::text(Some(role), msg.text.clone())
    }
}

impl GenerateContentRequest {
    /// Single-turn question: only the latest user message is sent
    pub fn ask(system_instruction: impl Into<String>, question: &str) -> Self {
        Self {
            system_instruction: Content::text(None, system_instruction),
            contents: vec![Content::from(&ChatMessage::user(question))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_format_uses_camel_case() {
        let req = GenerateContentRequest::ask("Anda adalah konsultan", "Berapa harga paket VIP?");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "systemInstruction": { "parts": [ { "text": "Anda adalah konsultan" } ] },
                "contents": [
                    { "role": "user", "parts": [ { "text": "Berapa harga paket VIP?" } ] }
                ]
            })
        );
    }
}
