//! ASR engine using Vosk (offline)

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use vosk::{CompleteResult, Model, Recognizer};

use crate::audio::SAMPLE_RATE;

/// Load a Vosk model directory. Loading is slow; share the result.
pub fn load_model(model_path: &Path) -> Result<Arc<Model>> {
    if !model_path.exists() {
        return Err(anyhow::anyhow!(
            "Vosk model not found at {}",
            model_path.display()
        ));
    }

    info!("Loading Vosk model from: {}", model_path.display());

    let model_str = model_path.to_str().ok_or_else(|| {
        anyhow::anyhow!(
            "Vosk model path is not valid UTF-8: {}",
            model_path.display()
        )
    })?;

    let model = Model::new(model_str).context("Failed to load Vosk model")?;
    Ok(Arc::new(model))
}

/// Vosk-based ASR engine
pub struct VoskAsr {
    recognizer: Recognizer,
}

impl VoskAsr {
    /// Create a recognizer over an already loaded model
    pub fn new(model: &Model) -> Result<Self> {
        let mut recognizer = Recognizer::new(model, SAMPLE_RATE as f32)
            .context("Failed to create Vosk recognizer")?;
        // Word-level results carry the confidences we filter on
        recognizer.set_words(true);

        Ok(Self { recognizer })
    }
}

impl super::AsrEngine for VoskAsr {
    fn process(&mut self, samples: &[i16]) -> Result<Option<super::AsrResult>> {
        match self.recognizer.accept_waveform(samples) {
            vosk::DecodingState::Finalized => Ok(accept(self.recognizer.final_result())),
            vosk::DecodingState::Running => {
                debug!("Partial: {}", self.recognizer.partial_result().partial);
                Ok(None)
            }
            vosk::DecodingState::Failed => {
                debug!("Decoding failed for this chunk");
                Ok(None)
            }
        }
    }

    fn flush(&mut self) -> Option<super::AsrResult> {
        accept(self.recognizer.final_result())
    }
}

/// First alternative, confidence-filtered
fn accept(result: CompleteResult<'_>) -> Option<super::AsrResult> {
    let single = result.single()?;
    let text = extract_text(single.text)?;

    let confidence = if single.result.is_empty() {
        1.0f32
    } else {
        let sum: f32 = single.result.iter().map(|w| w.conf).sum();
        sum / single.result.len() as f32
    };

    if confidence < super::MIN_CONFIDENCE {
        info!(
            "🔇 Rejecting low-confidence ASR ({:.2}): '{}'",
            confidence, text
        );
        return None;
    }

    Some(super::AsrResult { text, confidence })
}

/// Extract text from Vosk result, filtering empty results
fn extract_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text() {
        assert_eq!(extract_text(""), None);
        assert_eq!(extract_text("  "), None);
        assert_eq!(extract_text("hello"), Some("hello".to_string()));
        assert_eq!(extract_text("  hello  "), Some("hello".to_string()));
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = load_model(&dir.path().join("no-model")).err().unwrap();
        assert!(err.to_string().contains("Vosk model not found"));
    }
}
