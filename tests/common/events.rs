//! Shared side-effect log, so tests can check ordering across fakes

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Speak(String),
    Open(String),
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn speak(text: &str) -> Event {
    Event::Speak(text.to_string())
}

pub fn open(url: &str) -> Event {
    Event::Open(url.to_string())
}
