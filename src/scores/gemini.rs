//! Generative search API client

use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

use super::models::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;
use crate::constants::gemini::API_KEY_MASK;
use crate::error::AppError;

/// Builds the `generateContent` URL for a model.
///
/// # Example
/// ```
/// use tennis_scores::scores::gemini::build_generate_url;
///
/// let url = build_generate_url("https://api.example.com/v1beta", "gemini-2.0-flash", "k");
/// assert_eq!(url, "https://api.example.com/v1beta/models/gemini-2.0-flash:generateContent?key=k");
/// ```
pub fn build_generate_url(api_base: &str, model: &str, api_key: &str) -> String {
    format!("{api_base}/models/{model}:generateContent?key={api_key}")
}

/// Replaces every occurrence of `api_key` in `url` so the URL can be logged.
pub fn mask_api_key(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return url.to_string();
    }
    url.replace(api_key, API_KEY_MASK)
}

/// Picks the first candidate's text out of a response envelope.
///
/// # Errors
/// * `AppError::GeminiNoResponse` - No candidates at all
/// * `AppError::GeminiNoText` - First candidate has no (or empty) text
pub fn extract_text(response: GenerateContentResponse) -> Result<String, AppError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(AppError::GeminiNoResponse)?;

    match candidate.first_text() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => {
            error!(
                "No text in response (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            );
            Err(AppError::GeminiNoText)
        }
    }
}

/// Sends one grounded generation request for `prompt` and returns the completion text.
///
/// Exactly one request is made; any failure is returned to the caller.
/// The API key never reaches the log: the echoed URL is masked and transport
/// errors are stripped of their URL.
#[instrument(skip_all, fields(model = %config.model))]
pub async fn fetch_completion(
    client: &Client,
    config: &GeminiConfig,
    prompt: &str,
) -> Result<String, AppError> {
    let url = build_generate_url(&config.api_base, &config.model, &config.api_key);

    info!("Making request to Gemini API");
    info!("URL: {}", mask_api_key(&url, &config.api_key));

    let started = Instant::now();
    let response = client
        .post(&url)
        .json(&GenerateContentRequest::grounded(prompt))
        .send()
        .await
        .map_err(|e| AppError::Http(e.without_url()))?;

    let status = response.status();
    info!("Response status: {status}");
    info!("Response time: {} ms", started.elapsed().as_millis());

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Error response body: {}", mask_api_key(&body, &config.api_key));
        return Err(AppError::gemini_status(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Http(e.without_url()))?;
    let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

    debug!(
        candidates = parsed.candidates.len(),
        parts = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map_or(0, |c| c.parts.len()),
        finish_reason = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("unknown"),
        "Response structure"
    );

    if parsed.candidates.is_empty() {
        error!("Full response: {body}");
    }

    let text = extract_text(parsed)?;
    info!("Got text response, length: {} characters", text.chars().count());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path, query_param},
    };

    fn create_mock_config(api_base: String) -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key-123".to_string(),
            api_base,
            model: "gemini-2.0-flash".to_string(),
        }
    }

    fn completion(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn test_mask_api_key() {
        let url = build_generate_url("https://g.example.com/v1beta", "m", "abc123");
        assert_eq!(
            mask_api_key(&url, "abc123"),
            "https://g.example.com/v1beta/models/m:generateContent?key=***API_KEY***"
        );
        assert_eq!(mask_api_key("https://x", ""), "https://x");
    }

    #[tokio::test]
    async fn test_fetch_completion_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "test-key-123"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "the prompt" }] }],
                "tools": [{ "google_search": {} }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("## 🏆 Open")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = fetch_completion(&client, &config, "the prompt").await.unwrap();
        assert_eq!(text, "## 🏆 Open");
    }

    #[tokio::test]
    async fn test_fetch_completion_server_error_names_status() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let error = fetch_completion(&client, &config, "p").await.unwrap_err();
        assert!(matches!(error, AppError::GeminiStatus { status: 500, .. }));
        assert!(error.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_completion_no_candidates() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&mock_server)
            .await;

        let error = fetch_completion(&client, &config, "p").await.unwrap_err();
        assert!(matches!(error, AppError::GeminiNoResponse));
    }

    #[tokio::test]
    async fn test_fetch_completion_empty_text() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("")))
            .mount(&mock_server)
            .await;

        let error = fetch_completion(&client, &config, "p").await.unwrap_err();
        assert!(matches!(error, AppError::GeminiNoText));
    }

    #[tokio::test]
    async fn test_fetch_completion_malformed_json() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let error = fetch_completion(&client, &config, "p").await.unwrap_err();
        assert!(matches!(error, AppError::Json(_)));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_leak_key() {
        let client = create_test_http_client();
        // Nothing listens on port 9 (discard) on test machines
        let config = create_mock_config("http://127.0.0.1:9".to_string());

        let error = fetch_completion(&client, &config, "p").await.unwrap_err();
        assert!(matches!(error, AppError::Http(_)));
        assert!(!error.to_string().contains("test-key-123"));
    }
}
