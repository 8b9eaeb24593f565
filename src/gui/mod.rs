//! GUI module using iced
//!
//! The presentation layer: one start control, the last transcript and the
//! last information text.

use iced::{Element, Task};
use std::sync::Arc;
use tracing::{info, warn};

use crate::asr::SpeechCapture;
use crate::commands::CommandProcessor;

// Sub-modules
pub mod app;
pub mod home;
pub mod messages;
pub mod state;

// Re-exports for convenience
pub use app::FridayApp;
pub use messages::Message;
pub use state::AssistantState;

impl FridayApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SpeechReady(speech) => {
                info!(
                    "🔊 TTS ready: '{}' with {} voice(s)",
                    speech.engine_name(),
                    speech.voice_count()
                );
                self.processor = Some(CommandProcessor::from_config(
                    &self.config,
                    speech.clone(),
                ));
                self.speech = Some(speech);
                if self.capture.is_some() {
                    self.status = "Ready".to_string();
                }
            }
            Message::CaptureReady(capture) => {
                info!("🎙️ Speech capture ready");
                self.capture = Some(capture);
                if self.processor.is_some() {
                    self.status = "Ready".to_string();
                }
            }
            Message::CaptureUnavailable(reason) => {
                warn!("⚠️ Speech capture unavailable: {}", reason);
                self.status = format!("Microphone unavailable: {}", reason);
            }
            Message::StartPressed => {
                let Some(capture) = self.start_listening() else {
                    return Task::none();
                };

                info!("▶️ Start Listening pressed");
                return Task::perform(
                    async move {
                        match capture.capture().await {
                            Ok(heard) => heard,
                            Err(e) => {
                                warn!("❌ Capture failed: {}", e);
                                None
                            }
                        }
                    },
                    Message::CaptureFinished,
                );
            }
            Message::CaptureFinished(heard) => {
                if let Some((ticket, command, processor)) = self.finish_listening(heard) {
                    return Task::perform(
                        async move { (ticket, processor.process(&command).await) },
                        |(ticket, reply)| Message::Replied(ticket, reply),
                    );
                }
            }
            Message::Replied(ticket, reply) => {
                if self.state.apply(ticket, &reply) {
                    info!("💬 {:?}: {}", reply.branch, reply.information);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        home::view(self)
    }

    /// Claim the single capture slot. `None` while booting or already listening.
    fn start_listening(&mut self) -> Option<Arc<dyn SpeechCapture>> {
        let capture = self.capture.clone()?;
        if self.processor.is_none() || !self.state.begin_listening() {
            return None;
        }
        Some(capture)
    }

    /// Release the capture slot; a heard command comes back ready to dispatch
    fn finish_listening(
        &mut self,
        heard: Option<String>,
    ) -> Option<(u64, String, CommandProcessor)> {
        self.state.finish_listening();

        let command = heard?;
        info!("📥 Transcription: {}", command);
        let ticket = self.state.record_transcript(&command);
        let processor = self.processor.clone()?;
        Some((ticket, command, processor))
    }
}
