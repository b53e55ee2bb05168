// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Object storage collaborator trait.

use async_trait::async_trait;

use crate::error::VigilError;
use crate::types::StorageLocation;

/// Opaque bucket+key object storage.
///
/// Locations are treated as opaque; the pipeline never interprets bucket
/// or key contents beyond content-identity derivation.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the object at `location`.
    async fn get(&self, location: &StorageLocation) -> Result<Vec<u8>, VigilError>;

    /// Store `bytes` at `location`, overwriting any existing object.
    async fn put(&self, location: &StorageLocation, bytes: Vec<u8>) -> Result<(), VigilError>;
}
