// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the messages-style inference API.
//!
//! Handles request construction, authentication headers, transient error
//! retry, and carries its own transport timeout -- distinct from the
//! transcription deadline, which belongs to the job poller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use vigil_core::{InferenceClient, VigilError};

use crate::types::{ApiErrorResponse, ApiMessage, MessageRequest, MessageResponse};

/// Base URL for the messages API.
const API_BASE_URL: &str = "https://api.anthropic.com/v1/messages";

/// HTTP client for inference API communication.
///
/// Manages authentication headers, connection pooling, and retry logic
/// for transient errors (429, 500, 503, 529).
#[derive(Debug, Clone)]
pub struct MessagesClient {
    client: reqwest::Client,
    model: String,
    max_retries: u32,
    base_url: String,
}

impl MessagesClient {
    /// Creates a new messages API client.
    ///
    /// # Arguments
    /// * `api_key` - API key for authentication
    /// * `api_version` - API version string (e.g., "2023-06-01")
    /// * `model` - Model identifier sent with every request
    /// * `request_timeout` - Per-request transport timeout
    pub fn new(
        api_key: &str,
        api_version: &str,
        model: String,
        request_timeout: Duration,
    ) -> Result<Self, VigilError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| VigilError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(api_version)
                .map_err(|e| VigilError::Config(format!("invalid API version header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(request_timeout)
            .build()
            .map_err(|e| VigilError::Inference {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            max_retries: 1,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    async fn send_request(
        &self,
        request: &MessageRequest,
    ) -> Result<MessageResponse, VigilError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(&self.base_url)
                .json(request)
                .send()
                .await
                .map_err(|e| VigilError::Inference {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| VigilError::Inference {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let parsed: MessageResponse =
                    serde_json::from_str(&body).map_err(|e| VigilError::Inference {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return Ok(parsed);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(VigilError::Inference {
                    message: format!("API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "inference API error ({}): {}",
                    api_err.error.type_, api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(VigilError::Inference {
                message,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| VigilError::Inference {
            message: "completion request failed after retries".into(),
            source: None,
        }))
    }
}

#[async_trait]
impl InferenceClient for MessagesClient {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f64,
        top_p: f64,
    ) -> Result<String, VigilError> {
        let request = MessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage::user(prompt)],
            max_tokens,
            temperature,
            top_p,
        };
        let response = self.send_request(&request).await?;
        Ok(response.text())
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503 | 529)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> MessagesClient {
        MessagesClient::new(
            "test-api-key",
            "2023-06-01",
            "claude-sonnet-4-20250514".into(),
            Duration::from_secs(5),
        )
        .unwrap()
        .with_base_url(base_url.to_string())
    }

    fn success_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn"
        })
    }

    #[tokio::test]
    async fn complete_returns_response_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body(
                r#"{"scam_probability": 0.85, "reasoning": "urgent payment demand"}"#,
            )))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let text = client.complete("classify this", 500, 0.3, 0.9).await.unwrap();
        assert!(text.contains("0.85"));
    }

    #[tokio::test]
    async fn complete_retries_on_429() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"type": "rate_limit_error", "message": "Rate limited"}
        });

        // First request returns 429, second returns 200.
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(429).set_body_json(&error_body))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("after retry")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let text = client.complete("p", 500, 0.3, 0.9).await.unwrap();
        assert_eq!(text, "after retry");
    }

    #[tokio::test]
    async fn complete_fails_on_400_with_api_error_type() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"type": "invalid_request_error", "message": "Bad model"}
        });

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("p", 500, 0.3, 0.9).await.unwrap_err();
        assert!(err.to_string().contains("invalid_request_error"), "got: {err}");
    }

    #[tokio::test]
    async fn complete_exhausts_retries_on_503() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"type": "overloaded_error", "message": "Service overloaded"}
        });

        // Both attempts return 503.
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503).set_body_json(&error_body))
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("p", 500, 0.3, 0.9).await.unwrap_err();
        assert!(err.to_string().contains("overloaded_error"), "got: {err}");
    }

    #[tokio::test]
    async fn client_sends_auth_and_version_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.complete("p", 500, 0.3, 0.9).await;
        assert!(result.is_ok(), "headers should match: {result:?}");
    }
}
