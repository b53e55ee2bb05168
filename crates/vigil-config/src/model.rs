// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Vigil pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Vigil configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to the
/// pipeline's built-in values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VigilConfig {
    /// Pipeline-wide settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Transcription job settings.
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Inference API settings.
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Object storage settings.
    #[serde(default)]
    pub object_store: ObjectStoreConfig,

    /// Result datastore settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Pipeline-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Transcription job configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionConfig {
    /// Base URL of the transcription service API.
    #[serde(default = "default_transcription_url")]
    pub base_url: String,

    /// API key for the transcription service. `None` sends no auth header.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Hard wall-clock deadline for one job, in seconds.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,

    /// Sleep between status polls, in seconds.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Language hint passed on job submission.
    #[serde(default = "default_language_code")]
    pub language_code: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: default_transcription_url(),
            api_key: None,
            max_wait_secs: default_max_wait_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            language_code: default_language_code(),
        }
    }
}

fn default_transcription_url() -> String {
    "http://localhost:8085".to_string()
}

fn default_max_wait_secs() -> u64 {
    300
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_language_code() -> String {
    "ko-KR".to_string()
}

/// Inference API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// API key. `None` requires an environment variable override.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier sent with each completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate per verdict.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus sampling cutoff.
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// API version header value.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Per-request transport timeout in seconds, independent of the
    /// transcription deadline.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            api_version: default_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.3
}

fn default_top_p() -> f64 {
    0.9
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

/// Object storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectStoreConfig {
    /// Base URL of the object storage gateway.
    #[serde(default = "default_object_store_url")]
    pub base_url: String,
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_object_store_url(),
        }
    }
}

fn default_object_store_url() -> String {
    "http://localhost:8086".to_string()
}

/// Result datastore configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("vigil").join("vigil.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "vigil.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}
