// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across collaborator traits and the Vigil pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// An opaque bucket + key pair addressing an object in storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageLocation {
    pub bucket: String,
    pub key: String,
}

impl StorageLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

/// Stable content identifier derived from a storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub String);

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle states of a remote transcription job.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Submitted,
    InProgress,
    Completed,
    Failed,
    TimedOut,
}

impl JobStatus {
    /// Whether the remote service will make no further progress on this job.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::TimedOut)
    }
}

/// A point-in-time snapshot of a remote transcription job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobState {
    pub status: JobStatus,
    /// URI of the result artifact, populated once the job completes.
    pub output_uri: Option<String>,
    /// Remote failure reason, populated when the job fails.
    pub failure_reason: Option<String>,
}

/// The contextual risk signal produced by model-response extraction.
///
/// `scam_probability` is always within `[0.0, 1.0]`, rounded to three
/// decimal digits by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextualVerdict {
    pub scam_probability: f64,
    pub reasoning: String,
}
