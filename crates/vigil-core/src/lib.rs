// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Vigil media screening pipeline.
//!
//! This crate provides the error taxonomy, common types, collaborator
//! traits, and the two pure leaf components of the pipeline: content
//! identity derivation and score fusion. Everything else in the workspace
//! builds on the definitions here.

pub mod error;
pub mod fusion;
pub mod identity;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VigilError;
pub use types::{ContentId, ContextualVerdict, JobState, JobStatus, StorageLocation};

// Re-export all collaborator traits at crate root.
pub use traits::{InferenceClient, ObjectStore, TranscriptionClient};
