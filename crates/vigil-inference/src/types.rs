// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Messages API request/response types.
//!
//! The inference collaborator is single-turn and stateless: one user
//! message in, one completion out. Only the subset of the wire format the
//! pipeline touches is modeled.

use serde::{Deserialize, Serialize};

/// A request to the messages API.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    /// Model identifier.
    pub model: String,

    /// Conversation messages; always a single user turn here.
    pub messages: Vec<ApiMessage>,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f64,

    /// Nucleus sampling cutoff.
    pub top_p: f64,
}

/// A single message in the conversation format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Role: "user" or "assistant".
    pub role: String,
    /// Plain text content.
    pub content: String,
}

impl ApiMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A full response from the messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// Response ID.
    pub id: String,
    /// Content blocks; the completion text is the first text block.
    pub content: Vec<ResponseContentBlock>,
    /// Model that produced the response.
    pub model: String,
    /// Why generation stopped (e.g., "end_turn").
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl MessageResponse {
    /// Concatenated text of all text blocks in the response.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                ResponseContentBlock::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// A typed content block in a response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ResponseContentBlock {
    /// Text content block.
    #[serde(rename = "text")]
    Text { text: String },
}

/// A structured error body from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Details within an API error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type")]
    pub type_: String,
    pub message: String,
}
