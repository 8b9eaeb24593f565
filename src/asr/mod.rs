//! ASR (Automatic Speech Recognition) Module
//!
//! [`AsrEngine`] is a streaming recognizer fed with audio chunks.
//! [`SpeechCapture`] is the single-shot listen operation the UI drives:
//! one call, at most one lower-cased phrase.

pub mod microphone;
pub mod vosk;

use crate::audio::calculate_energy;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub use microphone::MicrophoneCapture;
pub use vosk::VoskAsr;

/// Result from ASR with confidence score
#[derive(Debug, Clone)]
pub struct AsrResult {
    pub text: String,
    pub confidence: f32,
}

/// Minimum confidence threshold (below this, results are discarded)
pub const MIN_CONFIDENCE: f32 = 0.5;

/// RMS energy under which a capture window counts as silence
const SILENCE_ENERGY: f32 = 300.0;

/// Trait for ASR engines
pub trait AsrEngine: Send {
    /// Process audio samples and return recognized text with confidence (if final)
    /// Results below MIN_CONFIDENCE should be filtered out internally
    fn process(&mut self, samples: &[i16]) -> Result<Option<AsrResult>>;

    /// Force out whatever is buffered when the audio ends
    fn flush(&mut self) -> Option<AsrResult> {
        None
    }
}

/// Single-shot speech capture
#[async_trait]
pub trait SpeechCapture: Send + Sync + std::fmt::Debug {
    /// Listen until one phrase is recognized or the capture window closes.
    /// `Ok(None)` covers silence and a closed audio source.
    async fn capture(&self) -> Result<Option<String>>;
}

/// Feed `chunks` into `engine` until one phrase is final or `timeout` passes.
///
/// The transcript is lower-cased. The engine is flushed once when the window
/// closes so a phrase cut off by the timeout is not lost.
pub fn listen_once<E: AsrEngine + ?Sized>(
    engine: &mut E,
    chunks: &Receiver<Vec<i16>>,
    timeout: Duration,
) -> Result<Option<String>> {
    let deadline = Instant::now() + timeout;
    let mut loudest = 0.0f32;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            debug!("⌛ Capture window closed");
            break;
        }

        match chunks.recv_timeout(remaining) {
            Ok(samples) => {
                loudest = loudest.max(calculate_energy(&samples));
                if let Some(result) = engine.process(&samples)? {
                    return Ok(Some(finish(result)));
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                debug!("⌛ Capture window closed");
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                debug!("Audio source closed");
                break;
            }
        }
    }

    if let Some(result) = engine.flush() {
        return Ok(Some(finish(result)));
    }

    if loudest < SILENCE_ENERGY {
        info!("🔇 Only silence heard");
    } else {
        info!("🤷 Speech heard but nothing recognized");
    }
    Ok(None)
}

fn finish(result: AsrResult) -> String {
    let text = result.text.to_lowercase();
    info!("📝 Heard: '{}' ({:.2})", text, result.confidence);
    text
}
