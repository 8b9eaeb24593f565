//! Main application state for Friday GUI
//!
//! Contains the FridayApp struct and initialization logic.

use iced::Task;
use std::sync::Arc;
use tracing::info;

use crate::asr::{MicrophoneCapture, SpeechCapture};
use crate::commands::CommandProcessor;
use crate::config::Config;
use crate::tts::SpeechOutput;

use super::messages::Message;
use super::state::AssistantState;

/// Main application state
pub struct FridayApp {
    /// Transcript, information text and listening flag
    pub(crate) state: AssistantState,
    /// Status line (boot progress, capture problems)
    pub(crate) status: String,
    /// Configuration
    pub(crate) config: Config,
    /// Speech output, once the engine is up
    pub(crate) speech: Option<Arc<SpeechOutput>>,
    /// Dispatcher, built when speech output is ready
    pub(crate) processor: Option<CommandProcessor>,
    /// Microphone capture, once the model is loaded
    pub(crate) capture: Option<Arc<dyn SpeechCapture>>,
}

impl FridayApp {
    /// Create a new FridayApp instance
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_default();
        info!("🚀 Friday app initialized");

        let app = Self {
            state: AssistantState::new(),
            status: "Starting...".to_string(),
            config: config.clone(),
            speech: None,
            processor: None,
            capture: None,
        };

        let speech_config = config.clone();
        let speech_task = Task::perform(
            async move { SpeechOutput::start(&speech_config).await },
            Message::SpeechReady,
        );

        let capture_task = Task::perform(MicrophoneCapture::load(config), |res| match res {
            Ok(capture) => Message::CaptureReady(Arc::new(capture)),
            Err(e) => Message::CaptureUnavailable(e.to_string()),
        });

        (app, Task::batch([speech_task, capture_task]))
    }

    /// Whether the start control is enabled
    pub fn can_listen(&self) -> bool {
        self.processor.is_some() && self.capture.is_some() && !self.state.is_listening()
    }

    /// Application title
    pub fn title(&self) -> String {
        "Voice Assistant (Friday)".to_string()
    }

    /// Application theme
    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }
}
