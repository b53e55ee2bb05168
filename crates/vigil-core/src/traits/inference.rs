// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inference service collaborator trait.

use async_trait::async_trait;

use crate::error::VigilError;

/// Single-turn, stateless text completion service.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Send `prompt` and return the raw completion text.
    ///
    /// Transport and auth failures surface as [`VigilError::Inference`];
    /// the caller is responsible for tolerating malformed completion
    /// *content*.
    ///
    /// [`VigilError::Inference`]: crate::error::VigilError::Inference
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f64,
        top_p: f64,
    ) -> Result<String, VigilError>;
}
