//! Mock person lookup with canned summaries

use async_trait::async_trait;
use friday::lookup::{PersonLookup, PersonSummary};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MockLookup {
    summaries: HashMap<String, PersonSummary>,
    /// Every name asked for, in order
    pub requests: Mutex<Vec<String>>,
}

impl MockLookup {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, title: &str, extract: &str) -> Self {
        self.summaries.insert(
            name.to_string(),
            PersonSummary {
                name: title.to_string(),
                extract: extract.to_string(),
            },
        );
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PersonLookup for MockLookup {
    async fn lookup(&self, name: &str) -> Option<PersonSummary> {
        self.requests.lock().unwrap().push(name.to_string());
        self.summaries.get(name).cloned()
    }
}
