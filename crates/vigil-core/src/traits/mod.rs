// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions.
//!
//! The pipeline core consumes three external collaborators -- object
//! storage, the transcription service, and the inference service -- and
//! talks to each only through the traits defined here. HTTP-backed
//! implementations live in `vigil-transcribe` and `vigil-inference`;
//! deterministic mocks live in `vigil-test-utils`.

pub mod inference;
pub mod object_store;
pub mod transcription;

pub use inference::InferenceClient;
pub use object_store::ObjectStore;
pub use transcription::TranscriptionClient;
