// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end contextual analysis of one media object.
//!
//! [`ContextAnalyzer`] owns the transcription-then-classification
//! sequence: submit a job, wait out the deadline-bounded poll, and send
//! the transcript to the inference API for a verdict. Transcripts too
//! short to carry meaning skip inference entirely and receive a fixed
//! low-confidence verdict.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use vigil_config::{InferenceConfig, TranscriptionConfig};
use vigil_core::types::{ContextualVerdict, StorageLocation};
use vigil_core::{InferenceClient, VigilError};
use vigil_transcribe::JobPoller;

use crate::extract::extract_verdict;
use crate::prompt::build_prompt;

/// Transcripts shorter than this many characters are not worth a model
/// call.
pub const MIN_TRANSCRIPT_CHARS: usize = 10;

/// Probability assigned to transcripts below [`MIN_TRANSCRIPT_CHARS`].
pub const SHORT_TRANSCRIPT_PROBABILITY: f64 = 0.3;

const SHORT_TRANSCRIPT_REASONING: &str = "transcript too short to analyze";

/// Runs transcription and contextual classification for one object.
pub struct ContextAnalyzer {
    poller: JobPoller,
    inference: Arc<dyn InferenceClient>,
    transcription_config: TranscriptionConfig,
    inference_config: InferenceConfig,
}

impl ContextAnalyzer {
    pub fn new(
        poller: JobPoller,
        inference: Arc<dyn InferenceClient>,
        transcription_config: TranscriptionConfig,
        inference_config: InferenceConfig,
    ) -> Self {
        Self {
            poller,
            inference,
            transcription_config,
            inference_config,
        }
    }

    /// Produce a contextual verdict for the media object at `source`.
    ///
    /// Transcription errors (submission, failure, timeout, artifact
    /// retrieval) propagate to the caller. Once a transcript is in hand
    /// the classification itself cannot fail on malformed model output,
    /// only on transport errors from the inference API.
    pub async fn analyze(
        &self,
        source: &StorageLocation,
    ) -> Result<ContextualVerdict, VigilError> {
        let handle = self
            .poller
            .submit(source, &self.transcription_config.language_code)
            .await?;
        let transcript = self
            .poller
            .await_completion(
                &handle,
                Duration::from_secs(self.transcription_config.max_wait_secs),
                Duration::from_secs(self.transcription_config.poll_interval_secs),
            )
            .await?;

        let transcript_chars = transcript.chars().count();
        if transcript_chars < MIN_TRANSCRIPT_CHARS {
            info!(
                source = %source,
                transcript_chars,
                "transcript below analysis threshold, skipping inference"
            );
            return Ok(ContextualVerdict {
                scam_probability: SHORT_TRANSCRIPT_PROBABILITY,
                reasoning: SHORT_TRANSCRIPT_REASONING.to_string(),
            });
        }

        let prompt = build_prompt(&transcript);
        debug!(source = %source, prompt_chars = prompt.chars().count(), "requesting verdict");
        let completion = self
            .inference
            .complete(
                &prompt,
                self.inference_config.max_tokens,
                self.inference_config.temperature,
                self.inference_config.top_p,
            )
            .await?;

        let verdict = extract_verdict(&completion);
        info!(
            source = %source,
            scam_probability = verdict.scam_probability,
            "contextual verdict produced"
        );
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_test_utils::{
        MockInferenceClient, MockObjectStore, MockTranscriptionClient, StatusStep,
    };

    fn artifact(transcript: &str) -> Vec<u8> {
        format!(
            r#"{{"results": {{"transcripts": [{{"transcript": "{transcript}"}}]}}}}"#
        )
        .into_bytes()
    }

    fn source() -> StorageLocation {
        StorageLocation::new("media", "uploads/user1/content-9/video.mp4")
    }

    async fn analyzer_with(
        script: Vec<StatusStep>,
        transcript: &str,
        inference: Arc<MockInferenceClient>,
    ) -> ContextAnalyzer {
        let transcription = Arc::new(MockTranscriptionClient::with_script(script));
        let objects = Arc::new(MockObjectStore::new());
        objects.set_fallback(artifact(transcript)).await;
        ContextAnalyzer::new(
            JobPoller::new(transcription, objects),
            inference,
            TranscriptionConfig::default(),
            InferenceConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn full_analysis_returns_the_model_verdict() {
        let inference = Arc::new(MockInferenceClient::with_responses(vec![
            r#"{"scam_probability": 0.82, "reasoning": "urgent transfer demand"}"#.into(),
        ]));
        let analyzer = analyzer_with(
            vec![StatusStep::in_progress(), StatusStep::completed()],
            "please transfer all your savings to this safe account immediately",
            inference.clone(),
        )
        .await;

        let verdict = analyzer.analyze(&source()).await.unwrap();
        assert_eq!(verdict.scam_probability, 0.82);
        assert_eq!(verdict.reasoning, "urgent transfer demand");
        assert_eq!(inference.call_count().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn prompt_carries_the_transcript() {
        let inference = Arc::new(MockInferenceClient::new());
        let analyzer = analyzer_with(
            vec![StatusStep::completed()],
            "wire the deposit to account 555 before noon",
            inference.clone(),
        )
        .await;

        analyzer.analyze(&source()).await.unwrap();
        let prompts = inference.received_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("wire the deposit to account 555 before noon"));
    }

    #[tokio::test(start_paused = true)]
    async fn short_transcript_skips_inference() {
        let inference = Arc::new(MockInferenceClient::new());
        let analyzer = analyzer_with(
            vec![StatusStep::completed()],
            "um hello",
            inference.clone(),
        )
        .await;

        let verdict = analyzer.analyze(&source()).await.unwrap();
        assert_eq!(verdict.scam_probability, SHORT_TRANSCRIPT_PROBABILITY);
        assert_eq!(verdict.reasoning, "transcript too short to analyze");
        assert_eq!(inference.call_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn unparseable_completion_degrades_to_neutral() {
        let inference = Arc::new(MockInferenceClient::with_responses(vec![
            "I am unable to provide a structured answer.".into(),
        ]));
        let analyzer = analyzer_with(
            vec![StatusStep::completed()],
            "a transcript long enough to be classified",
            inference,
        )
        .await;

        let verdict = analyzer.analyze(&source()).await.unwrap();
        assert_eq!(verdict.scam_probability, 0.5);
        assert_eq!(verdict.reasoning, "failed to parse model response");
    }

    #[tokio::test(start_paused = true)]
    async fn transcription_failure_propagates() {
        let inference = Arc::new(MockInferenceClient::new());
        let analyzer = analyzer_with(
            vec![StatusStep::failed("media unreadable")],
            "",
            inference.clone(),
        )
        .await;

        let err = analyzer.analyze(&source()).await.unwrap_err();
        assert!(matches!(err, VigilError::TranscriptionFailed { .. }));
        assert_eq!(inference.call_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn inference_transport_error_propagates() {
        let inference = Arc::new(MockInferenceClient::new().failing());
        let analyzer = analyzer_with(
            vec![StatusStep::completed()],
            "a transcript long enough to be classified",
            inference,
        )
        .await;

        let err = analyzer.analyze(&source()).await.unwrap_err();
        assert!(matches!(err, VigilError::Inference { .. }));
    }
}
