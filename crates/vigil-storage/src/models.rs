// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row types for the analysis results table.

/// A new or updated analysis outcome, keyed by content identifier.
#[derive(Debug, Clone)]
pub struct NewResult {
    pub content_id: String,
    pub bucket: String,
    pub object_key: String,
    pub audio_score: f64,
    pub video_score: f64,
    pub context_score: f64,
    pub final_score: u8,
    pub status: String,
    /// Workflow-supplied creation timestamp (RFC 3339). `None` means the
    /// database records its own clock on first insert.
    pub timestamp: Option<String>,
}

/// A persisted analysis result as read back from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub id: i64,
    pub content_id: String,
    pub bucket: String,
    pub object_key: String,
    pub audio_score: f64,
    pub video_score: f64,
    pub context_score: f64,
    pub final_score: i64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
