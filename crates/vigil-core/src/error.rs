// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Vigil screening pipeline.

use std::time::Duration;

use thiserror::Error;

/// The primary error type used across all Vigil collaborator traits and
/// pipeline operations.
///
/// Model-response parse irregularities are deliberately NOT represented
/// here: a malformed model completion degrades to a neutral verdict inside
/// the extractor instead of surfacing as an error.
#[derive(Debug, Error)]
pub enum VigilError {
    /// Configuration errors (invalid TOML, missing required fields, out-of-range values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The remote transcription job reported failure.
    #[error("transcription failed: {reason}")]
    TranscriptionFailed { reason: String },

    /// The transcription job did not reach a terminal state before the deadline.
    ///
    /// The remote job is left running; callers must treat this as a
    /// resource-leak risk.
    #[error("transcription timed out after {elapsed:?}")]
    TranscriptionTimeout { elapsed: Duration },

    /// The transcript result artifact was malformed or empty.
    #[error("transcript artifact malformed: {0}")]
    TranscriptParse(String),

    /// Inference collaborator errors (API failure, auth, transport timeout).
    #[error("inference error: {message}")]
    Inference {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Object storage errors (download/upload failure, missing artifact).
    #[error("object store error: {message}")]
    ObjectStore {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Result datastore errors (connection, migration, write failure).
    #[error("persistence error: {source}")]
    Persistence {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = VigilError::TranscriptionFailed {
            reason: "unsupported media format".into(),
        };
        assert_eq!(
            err.to_string(),
            "transcription failed: unsupported media format"
        );

        let err = VigilError::TranscriptionTimeout {
            elapsed: Duration::from_secs(300),
        };
        assert!(err.to_string().contains("300s"));

        let err = VigilError::TranscriptParse("no transcripts in artifact".into());
        assert!(err.to_string().contains("no transcripts"));
    }

    #[test]
    fn persistence_error_wraps_source() {
        let err = VigilError::Persistence {
            source: Box::new(std::io::Error::other("disk full")),
        };
        assert!(err.to_string().contains("disk full"));
    }
}
