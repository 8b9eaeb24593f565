//! Message types for the Friday GUI

use std::sync::Arc;

use crate::asr::SpeechCapture;
use crate::commands::Reply;
use crate::tts::SpeechOutput;

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    // Boot
    SpeechReady(Arc<SpeechOutput>),
    CaptureReady(Arc<dyn SpeechCapture>),
    CaptureUnavailable(String),

    // Core listening
    StartPressed,
    CaptureFinished(Option<String>),
    /// Reply tagged with the ticket of the transcript it answers
    Replied(u64, Reply),
}
