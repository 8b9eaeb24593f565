//! Command dispatch
//!
//! Classifies one lower-cased transcript into exactly one branch and runs
//! that branch's side effects in order: speak first, then open a tab.
//! Every command yields a [`Reply`]; nothing in here returns an error.

use crate::browser::{search_url, SystemBrowser, TabLauncher};
use crate::config::Config;
use crate::directory::{PersonDirectory, WebsiteDirectory};
use crate::lookup::{PersonLookup, WikipediaClient};
use crate::tts::Speaker;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const OPEN_PREFIX: &str = "open ";

pub const IDENTITY_REPLY: &str = "Hello Sir I'm Friday, Your voice assistant.";
pub const GREETING_REPLY: &str = "Hello Sir I'm Friday, how can I help you?";
pub const AGE_REPLY: &str = "Hello Sir I'm Friday, I'm 2 days old.";
pub const LOOKUP_FALLBACK: &str = "I couldn't find detailed information";

/// Fixed phrases, checked in this order
const FIXED_PHRASES: &[(&str, Branch, &str)] = &[
    ("what is your name", Branch::Identity, IDENTITY_REPLY),
    ("hello friday", Branch::Greeting, GREETING_REPLY),
    ("what is your age", Branch::Age, AGE_REPLY),
];

/// Which dispatch branch handled a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    OpenedSite,
    UnknownSite,
    Identity,
    Greeting,
    Age,
    PersonSummary,
    PersonFallback,
    WebSearch,
}

/// Outcome of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub branch: Branch,
    /// Text handed to speech output
    pub spoken: String,
    /// Text for the information display
    pub information: String,
}

impl Reply {
    fn new(branch: Branch, spoken: impl Into<String>, information: impl Into<String>) -> Self {
        Self {
            branch,
            spoken: spoken.into(),
            information: information.into(),
        }
    }
}

/// Command dispatcher
#[derive(Clone)]
pub struct CommandProcessor {
    websites: Arc<WebsiteDirectory>,
    people: Arc<PersonDirectory>,
    lookup: Arc<dyn PersonLookup>,
    speech: Arc<dyn Speaker>,
    browser: Arc<dyn TabLauncher>,
    search_base: String,
}

impl std::fmt::Debug for CommandProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandProcessor")
            .field("websites", &self.websites.len())
            .field("people", &self.people.names().len())
            .field("search_base", &self.search_base)
            .finish()
    }
}

impl CommandProcessor {
    pub fn new(
        lookup: Arc<dyn PersonLookup>,
        speech: Arc<dyn Speaker>,
        browser: Arc<dyn TabLauncher>,
        search_base: impl Into<String>,
    ) -> Self {
        Self {
            websites: Arc::new(WebsiteDirectory::new()),
            people: Arc::new(PersonDirectory::new()),
            lookup,
            speech,
            browser,
            search_base: search_base.into(),
        }
    }

    /// Wire the real summary client and system browser
    pub fn from_config(config: &Config, speech: Arc<dyn Speaker>) -> Self {
        Self::new(
            Arc::new(WikipediaClient::from_config(config)),
            speech,
            Arc::new(SystemBrowser::new()),
            config.search_url.clone(),
        )
    }

    /// Dispatch one lower-cased command
    pub async fn process(&self, command: &str) -> Reply {
        debug!("Processing command: '{}'", command);

        if let Some(rest) = command.strip_prefix(OPEN_PREFIX) {
            // Only the text up to a second "open " names the site
            let site = rest.split(OPEN_PREFIX).next().unwrap_or(rest);
            return self.open_site(site.trim()).await;
        }

        for (phrase, branch, response) in FIXED_PHRASES {
            if command.contains(phrase) {
                info!("🎯 Matched fixed phrase: '{}'", phrase);
                self.speech.speak(response).await;
                return Reply::new(*branch, *response, *response);
            }
        }

        if let Some(person) = self.people.first_match(command) {
            return self.describe_person(person, command).await;
        }

        let response = format!("Here is the information about {}", command);
        self.speech.speak(&response).await;
        self.web_search(command);
        Reply::new(Branch::WebSearch, response.clone(), response)
    }

    async fn open_site(&self, site: &str) -> Reply {
        match self.websites.lookup(site) {
            Some(url) => {
                info!("🎯 Opening site '{}'", site);
                let spoken = format!("Opening {}", site);
                self.speech.speak(&spoken).await;
                self.open_tab(url);
                Reply::new(Branch::OpenedSite, spoken, format!("Opened {}", site))
            }
            None => {
                info!("🤷 Unknown site '{}'", site);
                let spoken = format!("I don't know how to open {}", site);
                self.speech.speak(&spoken).await;
                Reply::new(
                    Branch::UnknownSite,
                    spoken,
                    format!("Could not find the website for  {}", site),
                )
            }
        }
    }

    async fn describe_person(&self, person: &str, command: &str) -> Reply {
        info!("🎯 Looking up '{}'", person);

        let reply = match self.lookup.lookup(person).await {
            Some(summary) => {
                let text = format!("{}, {}", summary.name, summary.extract);
                self.speech.speak(&text).await;
                Reply::new(Branch::PersonSummary, text.clone(), text)
            }
            None => {
                self.speech.speak(LOOKUP_FALLBACK).await;
                Reply::new(Branch::PersonFallback, LOOKUP_FALLBACK, LOOKUP_FALLBACK)
            }
        };

        self.web_search(command);
        reply
    }

    fn web_search(&self, query: &str) {
        self.open_tab(&search_url(&self.search_base, query));
    }

    fn open_tab(&self, url: &str) {
        if let Err(e) = self.browser.open(url) {
            warn!("❌ Could not open '{}': {}", url, e);
        }
    }
}
