// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vigil -- a media scam-screening pipeline.
//!
//! Library surface of the binary crate, exposing the invocation
//! boundary for integration tests.

pub mod pipeline;

pub use pipeline::{AnalysisRequest, InvocationResponse, Pipeline};
