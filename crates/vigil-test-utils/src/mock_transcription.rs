// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock transcription service with a scripted status sequence.
//!
//! `MockTranscriptionClient` replays a queue of [`StatusStep`]s, one per
//! `job_status` call. The final step repeats forever, so a one-element
//! script of `InProgress` models a job that never finishes.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use vigil_core::types::{JobState, JobStatus, StorageLocation};
use vigil_core::{TranscriptionClient, VigilError};

/// One scripted response to a `job_status` call.
#[derive(Debug, Clone)]
pub enum StatusStep {
    /// The service does not know the job yet (`Ok(None)`).
    NotVisible,
    /// A concrete job state.
    State(JobState),
    /// A hard transport failure.
    TransportError(String),
}

impl StatusStep {
    /// A job still being processed.
    pub fn in_progress() -> Self {
        Self::State(JobState {
            status: JobStatus::InProgress,
            output_uri: None,
            failure_reason: None,
        })
    }

    /// A completed job.
    pub fn completed() -> Self {
        Self::State(JobState {
            status: JobStatus::Completed,
            output_uri: Some("mock://artifact".to_string()),
            failure_reason: None,
        })
    }

    /// A failed job with the given remote reason.
    pub fn failed(reason: &str) -> Self {
        Self::State(JobState {
            status: JobStatus::Failed,
            output_uri: None,
            failure_reason: Some(reason.to_string()),
        })
    }
}

/// A mock transcription service that replays scripted status responses
/// and records submissions and deletions.
pub struct MockTranscriptionClient {
    script: Arc<Mutex<VecDeque<StatusStep>>>,
    submitted: Arc<Mutex<Vec<String>>>,
    deleted: Arc<Mutex<Vec<String>>>,
    fail_delete: AtomicBool,
}

impl MockTranscriptionClient {
    /// Create a mock whose `job_status` replays `script` in order, then
    /// repeats the last step indefinitely.
    pub fn with_script(script: Vec<StatusStep>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::from(script))),
            submitted: Arc::new(Mutex::new(Vec::new())),
            deleted: Arc::new(Mutex::new(Vec::new())),
            fail_delete: AtomicBool::new(false),
        }
    }

    /// Make every `delete_job` call fail, for exercising the best-effort
    /// cleanup path.
    pub fn failing_delete(self) -> Self {
        self.fail_delete.store(true, Ordering::SeqCst);
        self
    }

    /// Names of jobs submitted so far.
    pub async fn submitted_jobs(&self) -> Vec<String> {
        self.submitted.lock().await.clone()
    }

    /// Names of jobs deleted so far.
    pub async fn deleted_jobs(&self) -> Vec<String> {
        self.deleted.lock().await.clone()
    }
}

#[async_trait]
impl TranscriptionClient for MockTranscriptionClient {
    async fn submit_job(
        &self,
        job_name: &str,
        _source: &StorageLocation,
        _output: &StorageLocation,
        _language: &str,
    ) -> Result<(), VigilError> {
        self.submitted.lock().await.push(job_name.to_string());
        Ok(())
    }

    async fn job_status(&self, _job_name: &str) -> Result<Option<JobState>, VigilError> {
        let mut script = self.script.lock().await;
        let step = if script.len() > 1 {
            script.pop_front().expect("script not empty")
        } else {
            // Repeat the final step forever.
            script
                .front()
                .cloned()
                .unwrap_or(StatusStep::NotVisible)
        };
        match step {
            StatusStep::NotVisible => Ok(None),
            StatusStep::State(state) => Ok(Some(state)),
            StatusStep::TransportError(message) => Err(VigilError::TranscriptionFailed {
                reason: message,
            }),
        }
    }

    async fn delete_job(&self, job_name: &str) -> Result<(), VigilError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(VigilError::Internal("mock delete failure".into()));
        }
        self.deleted.lock().await.push(job_name.to_string());
        Ok(())
    }
}
