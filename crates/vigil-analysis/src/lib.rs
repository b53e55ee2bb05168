// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contextual risk analysis for the Vigil pipeline.
//!
//! Combines the transcription job poller with the inference API to turn a
//! media object into a [`vigil_core::types::ContextualVerdict`]. The
//! verdict extraction is deliberately tolerant: model output that cannot
//! be parsed degrades to a neutral verdict rather than failing the
//! pipeline.

pub mod extract;
pub mod orchestrator;
pub mod prompt;

pub use extract::extract_verdict;
pub use orchestrator::ContextAnalyzer;
