//! Mock tab launcher that records opened URLs

use super::events::{new_log, Event, EventLog};
use friday::browser::TabLauncher;
use friday::error::{FridayError, FridayResult};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct MockBrowser {
    pub opened: Arc<Mutex<Vec<String>>>,
    /// Simulate a missing opener
    pub should_fail: bool,
    /// Log shared with the other fakes
    pub events: EventLog,
}

impl Default for MockBrowser {
    fn default() -> Self {
        Self::with_log(new_log())
    }
}

impl MockBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(events: EventLog) -> Self {
        Self {
            opened: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
            events,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl TabLauncher for MockBrowser {
    fn open(&self, url: &str) -> FridayResult<()> {
        if self.should_fail {
            return Err(FridayError::Browser("mock opener missing".to_string()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        self.events.lock().unwrap().push(Event::Open(url.to_string()));
        Ok(())
    }
}
