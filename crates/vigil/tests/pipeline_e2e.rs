// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end pipeline tests with in-memory collaborators and a
//! temporary SQLite database.

use std::sync::Arc;

use tempfile::TempDir;

use vigil::pipeline::{AnalysisRequest, Pipeline};
use vigil_analysis::ContextAnalyzer;
use vigil_config::{InferenceConfig, StorageConfig, TranscriptionConfig};
use vigil_storage::ResultStore;
use vigil_test_utils::{
    MockInferenceClient, MockObjectStore, MockTranscriptionClient, StatusStep,
};
use vigil_transcribe::JobPoller;

const TRANSCRIPT_ARTIFACT: &[u8] = br#"{"results": {"transcripts": [{"transcript": "this is the national tax service, transfer your funds to the safe account immediately"}]}}"#;

struct Harness {
    pipeline: Pipeline,
    store_dir: TempDir,
}

impl Harness {
    async fn new(script: Vec<StatusStep>, completion: &str) -> Self {
        let transcription = Arc::new(MockTranscriptionClient::with_script(script));
        let objects = Arc::new(MockObjectStore::new());
        objects.set_fallback(TRANSCRIPT_ARTIFACT.to_vec()).await;
        let inference = Arc::new(MockInferenceClient::with_responses(vec![
            completion.to_string(),
        ]));

        let analyzer = ContextAnalyzer::new(
            JobPoller::new(transcription, objects),
            inference,
            TranscriptionConfig::default(),
            InferenceConfig::default(),
        );

        let store_dir = TempDir::new().unwrap();
        let db_path = store_dir.path().join("vigil.db");
        let store = ResultStore::new(StorageConfig {
            database_path: db_path.to_str().unwrap().to_string(),
            wal_mode: true,
        });
        store.initialize().await.unwrap();

        Self {
            pipeline: Pipeline::new(analyzer, store),
            store_dir,
        }
    }

    async fn open_store(&self) -> ResultStore {
        let db_path = self.store_dir.path().join("vigil.db");
        let store = ResultStore::new(StorageConfig {
            database_path: db_path.to_str().unwrap().to_string(),
            wal_mode: true,
        });
        store.initialize().await.unwrap();
        store
    }
}

fn request() -> AnalysisRequest {
    AnalysisRequest {
        bucket: "media".to_string(),
        key: "uploads/user123/content-uuid-1/video.mp4".to_string(),
        audio_score: Some(0.8),
        video_score: Some(0.6),
        timestamp: None,
    }
}

#[tokio::test(start_paused = true)]
async fn successful_screening_fuses_and_persists() {
    let harness = Harness::new(
        vec![StatusStep::in_progress(), StatusStep::completed()],
        r#"{"scam_probability": 0.9, "reasoning": "impersonates a government agency"}"#,
    )
    .await;

    let response = harness.pipeline.run(&request()).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_id, "content-uuid-1");
    // 0.8 * 0.3 + 0.6 * 0.3 + 0.9 * 0.4 = 0.78
    assert_eq!(response.final_score, Some(78));
    assert_eq!(response.status, "success");
    assert!(response.error.is_none());

    let record = harness
        .pipeline
        .store()
        .get_result("content-uuid-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.final_score, 78);
    assert_eq!(record.status, "completed");
    assert_eq!(record.bucket, "media");
    assert_eq!(record.object_key, "uploads/user123/content-uuid-1/video.mp4");
}

#[tokio::test(start_paused = true)]
async fn missing_modality_scores_default_to_neutral() {
    let harness = Harness::new(
        vec![StatusStep::completed()],
        r#"{"scam_probability": 0.5, "reasoning": "ambiguous"}"#,
    )
    .await;

    let response = harness
        .pipeline
        .run(&AnalysisRequest {
            audio_score: None,
            video_score: None,
            ..request()
        })
        .await;

    // All three signals neutral: 0.5 * 0.3 + 0.5 * 0.3 + 0.5 * 0.4 = 0.5
    assert_eq!(response.final_score, Some(50));
}

#[tokio::test(start_paused = true)]
async fn transcription_failure_is_a_fail_closed_500() {
    let harness = Harness::new(
        vec![StatusStep::failed("media unreadable")],
        r#"{"scam_probability": 0.0, "reasoning": "unused"}"#,
    )
    .await;

    let response = harness.pipeline.run(&request()).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.status, "error");
    assert!(response.final_score.is_none());
    assert!(response.error.unwrap().contains("media unreadable"));

    // Nothing persisted for a failed invocation.
    let store = harness.open_store().await;
    assert!(store.get_result("content-uuid-1").await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn rescreening_the_same_content_replaces_the_row() {
    let harness = Harness::new(
        vec![StatusStep::completed()],
        r#"{"scam_probability": 0.9, "reasoning": "first pass"}"#,
    )
    .await;

    let first = harness.pipeline.run(&request()).await;
    assert_eq!(first.status_code, 200);

    // Second run with a benign verdict overwrites the stored scores.
    let second = harness.pipeline.run(&request()).await;
    assert_eq!(second.status_code, 200);
    assert_eq!(second.content_id, first.content_id);

    let record = harness
        .pipeline
        .store()
        .get_result("content-uuid-1")
        .await
        .unwrap()
        .unwrap();
    // Queue exhausted on the second run: the mock falls back to an
    // unparseable completion, so the context score degrades to 0.5.
    // 0.8 * 0.3 + 0.6 * 0.3 + 0.5 * 0.4 = 0.62
    assert_eq!(record.final_score, 62);
}

#[tokio::test(start_paused = true)]
async fn workflow_timestamp_is_recorded_as_created_at() {
    let harness = Harness::new(
        vec![StatusStep::completed()],
        r#"{"scam_probability": 0.4, "reasoning": "benign"}"#,
    )
    .await;

    let response = harness
        .pipeline
        .run(&AnalysisRequest {
            timestamp: Some("2026-08-15T12:00:00.000Z".to_string()),
            ..request()
        })
        .await;
    assert_eq!(response.status_code, 200);

    let record = harness
        .pipeline
        .store()
        .get_result("content-uuid-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.created_at, "2026-08-15T12:00:00.000Z");
}

#[tokio::test(start_paused = true)]
async fn unparseable_verdict_still_completes_with_neutral_context() {
    let harness = Harness::new(
        vec![StatusStep::completed()],
        "I refuse to answer in the requested format.",
    )
    .await;

    let response = harness.pipeline.run(&request()).await;

    assert_eq!(response.status_code, 200);
    // 0.8 * 0.3 + 0.6 * 0.3 + 0.5 * 0.4 = 0.62
    assert_eq!(response.final_score, Some(62));
}
