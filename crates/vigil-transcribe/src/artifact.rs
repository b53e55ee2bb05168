// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcript result artifact parsing.
//!
//! Completed jobs leave a JSON artifact of the shape
//! `{"results": {"transcripts": [{"transcript": "..."}]}}` at the declared
//! output location. Only the first transcript string is used.

use serde::Deserialize;

use vigil_core::VigilError;

#[derive(Debug, Deserialize)]
struct TranscriptDocument {
    results: TranscriptResults,
}

#[derive(Debug, Deserialize)]
struct TranscriptResults {
    transcripts: Vec<TranscriptEntry>,
}

#[derive(Debug, Deserialize)]
struct TranscriptEntry {
    transcript: String,
}

/// Extract the first transcript string from a result artifact.
///
/// A malformed document or an empty transcript list is a
/// [`VigilError::TranscriptParse`] -- terminal for the invocation.
pub fn extract_transcript(bytes: &[u8]) -> Result<String, VigilError> {
    let doc: TranscriptDocument = serde_json::from_slice(bytes)
        .map_err(|e| VigilError::TranscriptParse(format!("invalid artifact JSON: {e}")))?;
    doc.results
        .transcripts
        .into_iter()
        .next()
        .map(|entry| entry.transcript)
        .ok_or_else(|| VigilError::TranscriptParse("artifact contains no transcripts".into()))
}
