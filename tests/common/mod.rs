#![allow(dead_code)]

pub mod events;
pub mod mock_asr;
pub mod mock_browser;
pub mod mock_lookup;
pub mod mock_tts;

use std::sync::Arc;

use events::{Event, EventLog};
use friday::commands::CommandProcessor;
use mock_browser::MockBrowser;
use mock_lookup::MockLookup;
use mock_tts::MockSpeaker;

pub const SEARCH_BASE: &str = "https://www.google.com/search";

/// Dispatcher wired to fakes, with handles to inspect them
pub struct TestContext {
    pub processor: CommandProcessor,
    pub speaker: Arc<MockSpeaker>,
    pub browser: Arc<MockBrowser>,
    pub lookup: Arc<MockLookup>,
    /// Speak and open events in the order they happened
    pub events: EventLog,
}

impl TestContext {
    pub fn new(lookup: MockLookup) -> Self {
        let events = events::new_log();
        let speaker = Arc::new(MockSpeaker::with_log(events.clone()));
        let browser = Arc::new(MockBrowser::with_log(events.clone()));
        let lookup = Arc::new(lookup);

        let processor = CommandProcessor::new(
            lookup.clone(),
            speaker.clone(),
            browser.clone(),
            SEARCH_BASE,
        );

        Self {
            processor,
            speaker,
            browser,
            lookup,
            events,
        }
    }

    pub fn get_events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Lookup that never finds anything
    pub fn offline() -> Self {
        Self::new(MockLookup::empty())
    }
}
