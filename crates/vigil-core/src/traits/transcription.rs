// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcription service collaborator trait.

use async_trait::async_trait;

use crate::error::VigilError;
use crate::types::{JobState, StorageLocation};

/// Asynchronous transcription service driven by the job poller.
///
/// Jobs are submitted by name, polled until a terminal state, and deleted
/// best-effort once their artifact has been retrieved.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    /// Submit a new transcription job.
    ///
    /// The service writes its result artifact to `output` when the job
    /// completes.
    async fn submit_job(
        &self,
        job_name: &str,
        source: &StorageLocation,
        output: &StorageLocation,
        language: &str,
    ) -> Result<(), VigilError>;

    /// Fetch the current state of a job.
    ///
    /// Returns `Ok(None)` when the service does not know the job yet
    /// (submission still propagating); pollers treat that as "keep
    /// waiting". Any `Err` is a hard transport failure and propagates.
    async fn job_status(&self, job_name: &str) -> Result<Option<JobState>, VigilError>;

    /// Delete the remote job record. Callers on the success path invoke
    /// this best-effort; a failure is logged, never propagated.
    async fn delete_job(&self, job_name: &str) -> Result<(), VigilError>;
}
