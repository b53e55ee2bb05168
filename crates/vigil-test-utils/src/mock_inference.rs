// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock inference client for deterministic testing.
//!
//! `MockInferenceClient` returns pre-configured completions from a FIFO
//! queue and records every prompt it receives.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use vigil_core::{InferenceClient, VigilError};

/// A mock inference client that returns pre-configured completions.
///
/// Completions are popped from a FIFO queue. When the queue is empty, a
/// default "mock completion" text is returned.
pub struct MockInferenceClient {
    responses: Arc<Mutex<VecDeque<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    fail: AtomicBool,
}

impl MockInferenceClient {
    /// Create a new mock with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Create a mock pre-loaded with the given completions.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every `complete` call fail with a transport error.
    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    /// Prompts received so far, in order.
    pub async fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Number of completion calls made.
    pub async fn call_count(&self) -> usize {
        self.prompts.lock().await.len()
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn complete(
        &self,
        prompt: &str,
        _max_tokens: u32,
        _temperature: f64,
        _top_p: f64,
    ) -> Result<String, VigilError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(VigilError::Inference {
                message: "mock transport failure".into(),
                source: None,
            });
        }
        self.prompts.lock().await.push(prompt.to_string());
        Ok(self
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock completion".to_string()))
    }
}
