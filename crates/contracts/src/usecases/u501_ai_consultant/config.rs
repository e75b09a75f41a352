use super::error::ConsultantError;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Where and how the consultant talks to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultantConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for ConsultantConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl ConsultantConfig {
    /// Build from optional overrides; blank values fall back to the defaults
    pub fn from_parts(
        endpoint: Option<&str>,
        model: Option<&str>,
        api_key: Option<&str>,
    ) -> Self {
        let non_blank = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string);
        let defaults = Self::default();
        Self {
            endpoint: non_blank(endpoint)
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            model: non_blank(model).unwrap_or(defaults.model),
            api_key: non_blank(api_key),
        }
    }

    /// `{endpoint}/models/{model}:generateContent`
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    pub fn api_key(&self) -> Result<&str, ConsultantError> {
        self.api_key.as_deref().ok_or(ConsultantError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_gemini() {
        let cfg = ConsultantConfig::from_parts(None, Some("  "), None);
        assert_eq!(
            cfg.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert_eq!(cfg.api_key(), Err(ConsultantError::MissingApiKey));
    }

    #[test]
    fn overrides_are_trimmed() {
        let cfg = ConsultantConfig::from_parts(
            Some("http://localhost:8080/v1/"),
            Some("test-model"),
            Some(" secret "),
        );
        assert_eq!(
            cfg.generate_url(),
            "http://localhost:8080/v1/models/test-model:generateContent"
        );
        assert_eq!(cfg.api_key(), Ok("secret"));
    }
}
