// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upsert and lookup of analysis results.
//!
//! Results are keyed by `content_id`: re-analyzing the same content
//! replaces the stored scores in place and keeps the original row id, so
//! retried invocations never create duplicates.

use rusqlite::params;

use vigil_core::VigilError;

use crate::database::Database;
use crate::models::{AnalysisRecord, NewResult};

/// Insert or replace the analysis result for a content id.
///
/// Returns the row id, which is stable across re-analysis of the same
/// content. A workflow-supplied timestamp becomes `created_at` on first
/// insert, falling back to the database clock; `created_at` is preserved
/// on conflict while `updated_at` advances.
pub async fn upsert_result(db: &Database, result: &NewResult) -> Result<i64, VigilError> {
    let result = result.clone();
    db.connection()
        .call(move |conn| -> Result<i64, rusqlite::Error> {
            conn.query_row(
                "INSERT INTO analysis_results
                     (content_id, bucket, object_key, audio_score, video_score,
                      context_score, final_score, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8,
                         COALESCE(?9, strftime('%Y-%m-%dT%H:%M:%fZ', 'now')))
                 ON CONFLICT (content_id) DO UPDATE SET
                     bucket = excluded.bucket,
                     object_key = excluded.object_key,
                     audio_score = excluded.audio_score,
                     video_score = excluded.video_score,
                     context_score = excluded.context_score,
                     final_score = excluded.final_score,
                     status = excluded.status,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 RETURNING id",
                params![
                    result.content_id,
                    result.bucket,
                    result.object_key,
                    result.audio_score,
                    result.video_score,
                    result.context_score,
                    result.final_score as i64,
                    result.status,
                    result.timestamp,
                ],
                |row| row.get(0),
            )
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Fetch the stored result for a content id, if any.
pub async fn get_result(
    db: &Database,
    content_id: &str,
) -> Result<Option<AnalysisRecord>, VigilError> {
    let content_id = content_id.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<AnalysisRecord>, rusqlite::Error> {
            let mut stmt = conn.prepare(
                "SELECT id, content_id, bucket, object_key, audio_score, video_score,
                        context_score, final_score, status, created_at, updated_at
                 FROM analysis_results WHERE content_id = ?1",
            )?;
            let result = stmt.query_row(params![content_id], |row| {
                Ok(AnalysisRecord {
                    id: row.get(0)?,
                    content_id: row.get(1)?,
                    bucket: row.get(2)?,
                    object_key: row.get(3)?,
                    audio_score: row.get(4)?,
                    video_score: row.get(5)?,
                    context_score: row.get(6)?,
                    final_score: row.get(7)?,
                    status: row.get(8)?,
                    created_at: row.get(9)?,
                    updated_at: row.get(10)?,
                })
            });
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}
