//! Microphone capture: cpal input + Vosk, one phrase per call

use super::{listen_once, SpeechCapture, VoskAsr};
use crate::audio;
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct MicrophoneCapture {
    model: Arc<vosk::Model>,
    device: Option<usize>,
    timeout: Duration,
}

impl std::fmt::Debug for MicrophoneCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MicrophoneCapture")
            .field("device", &self.device)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MicrophoneCapture {
    /// Load the configured model. Blocking; call from a blocking context.
    pub fn from_config(config: &Config) -> Result<Self> {
        let model = super::vosk::load_model(Path::new(&config.vosk_model_path))?;
        Ok(Self {
            model,
            device: config.audio_device,
            timeout: config.capture_timeout(),
        })
    }

    /// Load the model on the blocking pool
    pub async fn load(config: Config) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::from_config(&config))
            .await
            .context("Model loading task panicked")?
    }
}

#[async_trait]
impl SpeechCapture for MicrophoneCapture {
    async fn capture(&self) -> Result<Option<String>> {
        let model = self.model.clone();
        let device = self.device;
        let timeout = self.timeout;

        tokio::task::spawn_blocking(move || {
            let mut asr = VoskAsr::new(&model)?;
            let capture = audio::start_capture(device)?;
            info!("👂 Listening...");
            listen_once(&mut asr, &capture.chunks, timeout)
        })
        .await
        .context("Capture task panicked")?
    }
}
