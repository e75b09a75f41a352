use crate::shared::api_utils::consultant_config;
use contracts::usecases::u501_ai_consultant::{
    ConsultantError, GenerateContentRequest, GenerateContentResponse,
};
use gloo_net::http::Request;

/// Send one question; `Ok(None)` when the model returned no text
pub async fn ask(request: GenerateContentRequest) -> Result<Option<String>, ConsultantError> {
    let config = consultant_config();
    let api_key = config.api_key()?;

    let response = Request::post(&config.generate_url())
        .header("x-goog-api-key", api_key)
        .json(&request)
        .map_err(|e| ConsultantError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ConsultantError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ConsultantError::Http(response.status()));
    }

    let body: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| ConsultantError::Decode(e.to_string()))?;

    Ok(body.text())
}
