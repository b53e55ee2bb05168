// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deadline-bounded polling of asynchronous transcription jobs.
//!
//! [`JobPoller`] submits a job, then sleeps `poll_interval` between status
//! checks until a terminal state or the `max_wait` deadline. The wait is
//! non-busy (`tokio::time::sleep`) and holds no locks. On completion the
//! result artifact is fetched, the remote job record is deleted
//! best-effort, and the transcript text is returned. On timeout the remote
//! job is left running -- that asymmetry is deliberate, since the service
//! may still be processing.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use vigil_core::types::{JobStatus, StorageLocation};
use vigil_core::{ObjectStore, TranscriptionClient, VigilError};

use crate::artifact;

/// Key prefix for result artifacts within the source bucket.
const TRANSCRIPT_PREFIX: &str = "transcripts";

/// Handle to a submitted transcription job, owned by the invocation that
/// created it.
#[derive(Debug, Clone)]
pub struct JobHandle {
    /// Unique per-attempt job name.
    pub job_name: String,
    /// Location the service writes its result artifact to.
    pub output: StorageLocation,
}

/// Drives a remote transcription job from submission to transcript text.
pub struct JobPoller {
    transcription: Arc<dyn TranscriptionClient>,
    objects: Arc<dyn ObjectStore>,
}

impl JobPoller {
    pub fn new(
        transcription: Arc<dyn TranscriptionClient>,
        objects: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            transcription,
            objects,
        }
    }

    /// Submit a transcription job for `source`.
    ///
    /// The job name is derived from the source key plus a millisecond
    /// timestamp, making re-submissions of the same content
    /// collision-resistant. The result artifact lands under
    /// `transcripts/{job_name}.json` in the source bucket.
    pub async fn submit(
        &self,
        source: &StorageLocation,
        language: &str,
    ) -> Result<JobHandle, VigilError> {
        let job_name = derive_job_name(&source.key);
        let output = StorageLocation::new(
            &source.bucket,
            format!("{TRANSCRIPT_PREFIX}/{job_name}.json"),
        );
        self.transcription
            .submit_job(&job_name, source, &output, language)
            .await?;
        info!(job_name = %job_name, source = %source, "transcription job submitted");
        Ok(JobHandle { job_name, output })
    }

    /// Poll until the job reaches a terminal state or `max_wait` elapses.
    ///
    /// - COMPLETED: fetch the artifact, extract the first transcript
    ///   string, delete the remote job best-effort, return the text.
    /// - FAILED: [`VigilError::TranscriptionFailed`] with the remote reason.
    /// - Deadline exceeded: [`VigilError::TranscriptionTimeout`]; the
    ///   remote job keeps running. Total wait is bounded by
    ///   `max_wait + poll_interval`.
    ///
    /// A `None` status (job not yet visible) is re-polled; any status
    /// transport error propagates immediately. A zero `max_wait` fails
    /// fast with a timeout.
    pub async fn await_completion(
        &self,
        handle: &JobHandle,
        max_wait: Duration,
        poll_interval: Duration,
    ) -> Result<String, VigilError> {
        if max_wait.is_zero() {
            return Err(VigilError::TranscriptionTimeout {
                elapsed: Duration::ZERO,
            });
        }

        let started = tokio::time::Instant::now();
        loop {
            match self.transcription.job_status(&handle.job_name).await? {
                Some(state) => match state.status {
                    JobStatus::Completed => {
                        debug!(job_name = %handle.job_name, "job completed, fetching artifact");
                        let bytes = self.objects.get(&handle.output).await?;
                        let text = artifact::extract_transcript(&bytes)?;
                        if let Err(err) = self.transcription.delete_job(&handle.job_name).await {
                            warn!(
                                job_name = %handle.job_name,
                                error = %err,
                                "failed to delete completed transcription job"
                            );
                        }
                        info!(
                            job_name = %handle.job_name,
                            transcript_chars = text.chars().count(),
                            "transcript retrieved"
                        );
                        return Ok(text);
                    }
                    JobStatus::Failed => {
                        let reason = state
                            .failure_reason
                            .unwrap_or_else(|| "unknown failure".to_string());
                        return Err(VigilError::TranscriptionFailed { reason });
                    }
                    _ => {
                        debug!(job_name = %handle.job_name, status = %state.status, "job still running");
                    }
                },
                None => {
                    debug!(job_name = %handle.job_name, "job not visible yet");
                }
            }

            let elapsed = started.elapsed();
            if elapsed >= max_wait {
                warn!(
                    job_name = %handle.job_name,
                    elapsed = ?elapsed,
                    "transcription deadline exceeded, abandoning remote job"
                );
                return Err(VigilError::TranscriptionTimeout { elapsed });
            }
            tokio::time::sleep(poll_interval).await;
        }
    }
}

/// Derive a collision-resistant job name from a storage key.
fn derive_job_name(key: &str) -> String {
    format!(
        "vg-{}-{}",
        key.replace('/', "-"),
        Utc::now().timestamp_millis()
    )
}
