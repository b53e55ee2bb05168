// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vigil -- a media scam-screening pipeline.
//!
//! Binary entry point: loads configuration, wires the HTTP-backed
//! collaborators together, and runs one screening invocation per
//! `analyze` command.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vigil::pipeline::{AnalysisRequest, Pipeline};
use vigil_analysis::ContextAnalyzer;
use vigil_config::VigilConfig;
use vigil_core::VigilError;
use vigil_inference::MessagesClient;
use vigil_storage::ResultStore;
use vigil_transcribe::{HttpObjectStore, HttpTranscriptionClient, JobPoller};

/// Vigil - screen media content for scam indicators.
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Screen one media object and persist the result.
    Analyze {
        /// Bucket holding the media object.
        #[arg(long)]
        bucket: String,
        /// Object key within the bucket.
        #[arg(long)]
        key: String,
        /// Audio deepfake score from the upstream detector.
        #[arg(long)]
        audio_score: Option<f64>,
        /// Video deepfake score from the upstream detector.
        #[arg(long)]
        video_score: Option<f64>,
        /// Upload timestamp (RFC 3339), recorded as created_at on first
        /// persistence.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match vigil_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            for err in &errors {
                eprintln!("vigil: config error: {err}");
            }
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.pipeline.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            bucket,
            key,
            audio_score,
            video_score,
            timestamp,
        } => {
            let request = AnalysisRequest {
                bucket,
                key,
                audio_score,
                video_score,
                timestamp,
            };
            let pipeline = match build_pipeline(&config).await {
                Ok(pipeline) => pipeline,
                Err(err) => {
                    eprintln!("vigil: {err}");
                    std::process::exit(1);
                }
            };

            let response = pipeline.run(&request).await;
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("vigil: failed to serialize response: {err}"),
            }
            if response.status_code != 200 {
                std::process::exit(1);
            }
        }
    }
}

async fn build_pipeline(config: &VigilConfig) -> Result<Pipeline, VigilError> {
    let transcription = Arc::new(HttpTranscriptionClient::new(
        config.transcription.base_url.clone(),
        config.transcription.api_key.as_deref(),
    )?);
    let objects = Arc::new(HttpObjectStore::new(config.object_store.base_url.clone())?);

    let api_key = config.inference.api_key.as_deref().ok_or_else(|| {
        VigilError::Config("inference.api_key is required (set VIGIL_INFERENCE_API_KEY)".into())
    })?;
    let inference = Arc::new(MessagesClient::new(
        api_key,
        &config.inference.api_version,
        config.inference.model.clone(),
        Duration::from_secs(config.inference.request_timeout_secs),
    )?);

    let analyzer = ContextAnalyzer::new(
        JobPoller::new(transcription, objects),
        inference,
        config.transcription.clone(),
        config.inference.clone(),
    );

    let store = ResultStore::new(config.storage.clone());
    store.initialize().await?;

    Ok(Pipeline::new(analyzer, store))
}
