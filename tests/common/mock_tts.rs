//! Mock speech output for testing
//!
//! Records all spoken text for verification.

use super::events::{new_log, Event, EventLog};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock speaker that records spoken text
#[derive(Debug)]
pub struct MockSpeaker {
    /// All text that was "spoken"
    pub spoken: Arc<Mutex<Vec<String>>>,
    /// Log shared with the other fakes
    pub events: EventLog,
}

impl MockSpeaker {
    pub fn new() -> Self {
        Self::with_log(new_log())
    }

    pub fn with_log(events: EventLog) -> Self {
        Self {
            spoken: Arc::new(Mutex::new(Vec::new())),
            events,
        }
    }

    /// Get all spoken phrases
    pub fn get_spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    /// Check if a phrase was spoken
    pub fn was_spoken(&self, text: &str) -> bool {
        self.spoken.lock().unwrap().iter().any(|s| s == text)
    }
}

impl Default for MockSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl friday::tts::Speaker for MockSpeaker {
    async fn speak(&self, text: &str) {
        self.spoken.lock().unwrap().push(text.to_string());
        self.events
            .lock()
            .unwrap()
            .push(Event::Speak(text.to_string()));
    }
}
