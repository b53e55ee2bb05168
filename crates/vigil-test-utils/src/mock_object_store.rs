// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory object store for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use vigil_core::types::StorageLocation;
use vigil_core::{ObjectStore, VigilError};

/// An in-memory object store keyed by `bucket/key`.
#[derive(Default)]
pub struct MockObjectStore {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fallback: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object before the code under test runs.
    pub async fn insert(&self, location: &StorageLocation, bytes: Vec<u8>) {
        self.objects
            .lock()
            .await
            .insert(location.to_string(), bytes);
    }

    /// Serve `bytes` for any location with no exact match.
    ///
    /// Useful when the code under test derives keys the test cannot
    /// predict, such as timestamped artifact names.
    pub async fn set_fallback(&self, bytes: Vec<u8>) {
        *self.fallback.lock().await = Some(bytes);
    }

    /// Whether an object exists at `location`.
    pub async fn contains(&self, location: &StorageLocation) -> bool {
        self.objects.lock().await.contains_key(&location.to_string())
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn get(&self, location: &StorageLocation) -> Result<Vec<u8>, VigilError> {
        if let Some(bytes) = self.objects.lock().await.get(&location.to_string()) {
            return Ok(bytes.clone());
        }
        if let Some(bytes) = self.fallback.lock().await.as_ref() {
            return Ok(bytes.clone());
        }
        Err(VigilError::ObjectStore {
            message: format!("object not found: {location}"),
            source: None,
        })
    }

    async fn put(&self, location: &StorageLocation, bytes: Vec<u8>) -> Result<(), VigilError> {
        self.objects
            .lock()
            .await
            .insert(location.to_string(), bytes);
        Ok(())
    }
}
