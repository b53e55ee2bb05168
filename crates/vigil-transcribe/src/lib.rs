// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcription job driving for the Vigil pipeline.
//!
//! [`poller::JobPoller`] owns the submit/poll/cleanup lifecycle of a
//! remote transcription job under a hard wall-clock deadline;
//! [`artifact`] parses the JSON result artifact; [`client`] and
//! [`object_store`] provide the HTTP-backed collaborator implementations.

pub mod artifact;
pub mod client;
pub mod object_store;
pub mod poller;

pub use client::HttpTranscriptionClient;
pub use object_store::HttpObjectStore;
pub use poller::{JobHandle, JobPoller};
