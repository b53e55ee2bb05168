// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Vigil integration tests.
//!
//! Deterministic in-memory implementations of the collaborator traits,
//! enabling fast, CI-runnable tests without external services.

pub mod mock_inference;
pub mod mock_object_store;
pub mod mock_transcription;

pub use mock_inference::MockInferenceClient;
pub use mock_object_store::MockObjectStore;
pub use mock_transcription::{MockTranscriptionClient, StatusStep};
