// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed result store for the screening pipeline.

use tokio::sync::OnceCell;
use tracing::debug;

use vigil_config::StorageConfig;
use vigil_core::VigilError;

use crate::database::Database;
use crate::models::{AnalysisRecord, NewResult};
use crate::queries;

/// Persists analysis outcomes keyed by content identifier.
///
/// Wraps a [`Database`] handle and delegates to the typed query module.
/// The database is lazily opened on the first call to
/// [`ResultStore::initialize`].
pub struct ResultStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl ResultStore {
    /// Create a new store with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is
    /// called.
    ///
    /// [`initialize`]: ResultStore::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Open the database at the configured path and run migrations.
    pub async fn initialize(&self) -> Result<(), VigilError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| {
            VigilError::Internal("result store already initialized".to_string())
        })?;
        debug!(path = %self.config.database_path, "result store initialized");
        Ok(())
    }

    /// Checkpoint the WAL before shutdown.
    pub async fn close(&self) -> Result<(), VigilError> {
        if let Some(db) = self.db.get() {
            db.checkpoint().await?;
        }
        Ok(())
    }

    /// Insert or replace the result for a content id, returning the
    /// stable row id.
    pub async fn upsert_result(&self, result: &NewResult) -> Result<i64, VigilError> {
        queries::results::upsert_result(self.db()?, result).await
    }

    /// Fetch the stored result for a content id.
    pub async fn get_result(
        &self,
        content_id: &str,
    ) -> Result<Option<AnalysisRecord>, VigilError> {
        queries::results::get_result(self.db()?, content_id).await
    }

    fn db(&self) -> Result<&Database, VigilError> {
        self.db.get().ok_or_else(|| {
            VigilError::Internal(
                "result store not initialized -- call initialize() first".to_string(),
            )
        })
    }
}
