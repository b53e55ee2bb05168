// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The invocation boundary of the screening pipeline.
//!
//! [`Pipeline::run`] is fail-closed: it never panics and never returns an
//! error. Every invocation produces an [`InvocationResponse`], with
//! internal failures mapped to a 500 response carrying the error text.

use serde::Serialize;
use tracing::{error, info};

use vigil_analysis::ContextAnalyzer;
use vigil_core::fusion::{self, NEUTRAL_SCORE};
use vigil_core::identity;
use vigil_core::types::StorageLocation;
use vigil_storage::{NewResult, ResultStore};

/// One screening request: a media object plus any modality scores
/// already computed upstream.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub bucket: String,
    pub key: String,
    /// Audio deepfake score from the upstream detector, if it ran.
    pub audio_score: Option<f64>,
    /// Video deepfake score from the upstream detector, if it ran.
    pub video_score: Option<f64>,
    /// Upload timestamp supplied by the invoking workflow (RFC 3339).
    /// Recorded as `created_at` on first persistence; `None` lets the
    /// datastore use its own clock.
    pub timestamp: Option<String>,
}

/// The serialized outcome of one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationResponse {
    pub status_code: u16,
    pub content_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<u8>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvocationResponse {
    fn success(content_id: String, final_score: u8) -> Self {
        Self {
            status_code: 200,
            content_id,
            final_score: Some(final_score),
            status: "success".to_string(),
            error: None,
        }
    }

    fn error(content_id: String, error: String) -> Self {
        Self {
            status_code: 500,
            content_id,
            final_score: None,
            status: "error".to_string(),
            error: Some(error),
        }
    }
}

/// Drives one media object through analysis, fusion, and persistence.
pub struct Pipeline {
    analyzer: ContextAnalyzer,
    store: ResultStore,
}

impl Pipeline {
    pub fn new(analyzer: ContextAnalyzer, store: ResultStore) -> Self {
        Self { analyzer, store }
    }

    /// The underlying result store, for reading back persisted outcomes.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Screen one media object end to end.
    ///
    /// Modality scores missing from the request default to the neutral
    /// 0.5 so one absent detector cannot zero out the fused score.
    pub async fn run(&self, request: &AnalysisRequest) -> InvocationResponse {
        let content_id = identity::content_id(&request.key).0;
        let source = StorageLocation::new(&request.bucket, &request.key);
        info!(content_id = %content_id, source = %source, "screening started");

        let verdict = match self.analyzer.analyze(&source).await {
            Ok(verdict) => verdict,
            Err(err) => {
                error!(content_id = %content_id, error = %err, "contextual analysis failed");
                return InvocationResponse::error(content_id, err.to_string());
            }
        };

        let audio_score = request.audio_score.unwrap_or(NEUTRAL_SCORE);
        let video_score = request.video_score.unwrap_or(NEUTRAL_SCORE);
        let final_score = fusion::fuse(audio_score, video_score, verdict.scam_probability);

        let result = NewResult {
            content_id: content_id.clone(),
            bucket: request.bucket.clone(),
            object_key: request.key.clone(),
            audio_score,
            video_score,
            context_score: verdict.scam_probability,
            final_score,
            status: "completed".to_string(),
            timestamp: request.timestamp.clone(),
        };
        if let Err(err) = self.store.upsert_result(&result).await {
            error!(content_id = %content_id, error = %err, "failed to persist result");
            return InvocationResponse::error(content_id, err.to_string());
        }

        info!(
            content_id = %content_id,
            final_score,
            reasoning = %verdict.reasoning,
            "screening completed"
        );
        InvocationResponse::success(content_id, final_score)
    }
}
