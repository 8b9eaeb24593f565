//! Mock ASR Engine for Testing
//!
//! Provides controlled responses for capture tests.

use anyhow::Result;
use friday::asr::{AsrEngine, AsrResult};
use std::sync::{Arc, Mutex};

/// Mock ASR engine that returns predetermined responses
pub struct MockAsr {
    /// Per-chunk responses; `None` means "still listening"
    pub responses: Vec<Option<AsrResult>>,
    /// Current index in responses
    idx: usize,
    /// Record all audio chunks received (for verification)
    pub received_chunks: Arc<Mutex<Vec<Vec<i16>>>>,
}

impl MockAsr {
    pub fn new(responses: Vec<Option<AsrResult>>) -> Self {
        Self {
            responses,
            idx: 0,
            received_chunks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Recognize `text` on the `n`th chunk (1-based)
    pub fn phrase_after(n: usize, text: &str, confidence: f32) -> Self {
        let mut responses: Vec<Option<AsrResult>> = vec![None; n.saturating_sub(1)];
        responses.push(Some(AsrResult {
            text: text.to_string(),
            confidence,
        }));
        Self::new(responses)
    }

    /// Never recognizes anything
    pub fn deaf() -> Self {
        Self::new(Vec::new())
    }
}

impl AsrEngine for MockAsr {
    fn process(&mut self, samples: &[i16]) -> Result<Option<AsrResult>> {
        if let Ok(mut chunks) = self.received_chunks.lock() {
            chunks.push(samples.to_vec());
        }

        let result = self.responses.get(self.idx).cloned().flatten();
        self.idx += 1;
        Ok(result)
    }
}
