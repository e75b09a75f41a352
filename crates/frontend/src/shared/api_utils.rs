//! Settings for outbound API calls
//!
//! The AI consultant endpoint is baked in at build time:
//! `AI_API_KEY`, `AI_MODEL` and `AI_ENDPOINT` are read with `option_env!`
//! when the wasm bundle is compiled (e.g. `AI_API_KEY=... trunk build`).

use contracts::usecases::u501_ai_consultant::ConsultantConfig;

/// Consultant configuration; missing variables fall back to the defaults
pub fn consultant_config() -> ConsultantConfig {
    ConsultantConfig::from_parts(
        option_env!("AI_ENDPOINT"),
        option_env!("AI_MODEL"),
        option_env!("AI_API_KEY"),
    )
}
