// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the transcription service API.
//!
//! Implements [`TranscriptionClient`] against a REST surface:
//! `POST /jobs` to submit, `GET /jobs/{name}` for status (404 while the
//! submission is still propagating), `DELETE /jobs/{name}` for cleanup.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vigil_core::types::{JobState, JobStatus, StorageLocation};
use vigil_core::{TranscriptionClient, VigilError};

/// Per-request transport timeout for transcription API calls. Status
/// checks are short; the long wait lives in the poller, not here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SubmitJobRequest<'a> {
    job_name: &'a str,
    source_bucket: &'a str,
    source_key: &'a str,
    output_bucket: &'a str,
    output_key: &'a str,
    language_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct JobStatusResponse {
    status: JobStatus,
    #[serde(default)]
    output_uri: Option<String>,
    #[serde(default)]
    failure_reason: Option<String>,
}

/// HTTP-backed transcription service client.
#[derive(Debug, Clone)]
pub struct HttpTranscriptionClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranscriptionClient {
    /// Create a client for the service at `base_url`.
    ///
    /// When `api_key` is set it is sent as an `x-api-key` header on every
    /// request.
    pub fn new(base_url: String, api_key: Option<&str>) -> Result<Self, VigilError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            headers.insert(
                "x-api-key",
                HeaderValue::from_str(key)
                    .map_err(|e| VigilError::Config(format!("invalid API key header value: {e}")))?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VigilError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl TranscriptionClient for HttpTranscriptionClient {
    async fn submit_job(
        &self,
        job_name: &str,
        source: &StorageLocation,
        output: &StorageLocation,
        language: &str,
    ) -> Result<(), VigilError> {
        let body = SubmitJobRequest {
            job_name,
            source_bucket: &source.bucket,
            source_key: &source.key,
            output_bucket: &output.bucket,
            output_key: &output.key,
            language_code: language,
        };

        let response = self
            .client
            .post(format!("{}/jobs", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| VigilError::TranscriptionFailed {
                reason: format!("submit request failed: {e}"),
            })?;

        let status = response.status();
        debug!(job_name, status = %status, "job submission response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VigilError::TranscriptionFailed {
                reason: format!("submit rejected with {status}: {body}"),
            });
        }
        Ok(())
    }

    async fn job_status(&self, job_name: &str) -> Result<Option<JobState>, VigilError> {
        let response = self
            .client
            .get(format!("{}/jobs/{job_name}", self.base_url))
            .send()
            .await
            .map_err(|e| VigilError::TranscriptionFailed {
                reason: format!("status request failed: {e}"),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // Submission still propagating; the poller keeps waiting.
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VigilError::TranscriptionFailed {
                reason: format!("status request rejected with {status}: {body}"),
            });
        }

        let parsed: JobStatusResponse =
            response
                .json()
                .await
                .map_err(|e| VigilError::TranscriptionFailed {
                    reason: format!("malformed status response: {e}"),
                })?;
        Ok(Some(JobState {
            status: parsed.status,
            output_uri: parsed.output_uri,
            failure_reason: parsed.failure_reason,
        }))
    }

    async fn delete_job(&self, job_name: &str) -> Result<(), VigilError> {
        let response = self
            .client
            .delete(format!("{}/jobs/{job_name}", self.base_url))
            .send()
            .await
            .map_err(|e| VigilError::TranscriptionFailed {
                reason: format!("delete request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VigilError::TranscriptionFailed {
                reason: format!("delete rejected with {status}"),
            });
        }
        Ok(())
    }
}
