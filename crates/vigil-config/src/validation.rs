// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and sampling parameter ranges.

use thiserror::Error;

use crate::model::VigilConfig;

/// A single configuration validation failure.
#[derive(Debug, Error)]
#[error("invalid configuration: {message}")]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects all validation errors instead of failing fast.
pub fn validate_config(config: &VigilConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::new("storage.database_path must not be empty"));
    }

    if config.transcription.base_url.trim().is_empty() {
        errors.push(ConfigError::new("transcription.base_url must not be empty"));
    }

    if config.object_store.base_url.trim().is_empty() {
        errors.push(ConfigError::new("object_store.base_url must not be empty"));
    }

    if config.transcription.poll_interval_secs == 0 {
        errors.push(ConfigError::new(
            "transcription.poll_interval_secs must be greater than zero",
        ));
    }

    if config.transcription.language_code.trim().is_empty() {
        errors.push(ConfigError::new(
            "transcription.language_code must not be empty",
        ));
    }

    let temp = config.inference.temperature;
    if !(0.0..=1.0).contains(&temp) {
        errors.push(ConfigError::new(format!(
            "inference.temperature must be in [0.0, 1.0], got {temp}"
        )));
    }

    let top_p = config.inference.top_p;
    if !(0.0..=1.0).contains(&top_p) {
        errors.push(ConfigError::new(format!(
            "inference.top_p must be in [0.0, 1.0], got {top_p}"
        )));
    }

    if config.inference.max_tokens == 0 {
        errors.push(ConfigError::new(
            "inference.max_tokens must be greater than zero",
        ));
    }

    if config.inference.request_timeout_secs == 0 {
        errors.push(ConfigError::new(
            "inference.request_timeout_secs must be greater than zero",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
