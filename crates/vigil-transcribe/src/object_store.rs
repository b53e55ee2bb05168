// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP-backed object storage gateway.
//!
//! Objects are addressed as `{base_url}/{bucket}/{key}` with plain GET/PUT
//! semantics.

use std::time::Duration;

use async_trait::async_trait;

use vigil_core::types::StorageLocation;
use vigil_core::{ObjectStore, VigilError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Object store speaking plain HTTP GET/PUT against a storage gateway.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpObjectStore {
    pub fn new(base_url: String) -> Result<Self, VigilError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VigilError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    fn object_url(&self, location: &StorageLocation) -> String {
        format!("{}/{}/{}", self.base_url, location.bucket, location.key)
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn get(&self, location: &StorageLocation) -> Result<Vec<u8>, VigilError> {
        let response = self
            .client
            .get(self.object_url(location))
            .send()
            .await
            .map_err(|e| VigilError::ObjectStore {
                message: format!("get {location} failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VigilError::ObjectStore {
                message: format!("get {location} rejected with {status}"),
                source: None,
            });
        }
        let bytes = response.bytes().await.map_err(|e| VigilError::ObjectStore {
            message: format!("reading body of {location} failed: {e}"),
            source: Some(Box::new(e)),
        })?;
        Ok(bytes.to_vec())
    }

    async fn put(&self, location: &StorageLocation, bytes: Vec<u8>) -> Result<(), VigilError> {
        let response = self
            .client
            .put(self.object_url(location))
            .body(bytes)
            .send()
            .await
            .map_err(|e| VigilError::ObjectStore {
                message: format!("put {location} failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VigilError::ObjectStore {
                message: format!("put {location} rejected with {status}"),
                source: None,
            });
        }
        Ok(())
    }
}
