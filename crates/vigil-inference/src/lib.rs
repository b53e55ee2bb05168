// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inference API client for the Vigil pipeline.
//!
//! Provides [`MessagesClient`], the HTTP-backed implementation of the
//! [`vigil_core::InferenceClient`] trait used for contextual risk
//! classification.

pub mod client;
pub mod types;

pub use client::MessagesClient;
