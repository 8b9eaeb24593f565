//! Fixed lookup tables
//!
//! Website shortcuts and the famous-person list. Both are built once at
//! startup and never change at runtime.

use std::collections::HashMap;

/// Site name -> URL for "open <site>" commands
const WEBSITES: &[(&str, &str)] = &[
    ("youtube", "https://www.youtube.com"),
    ("facebook", "https://www.facebook.com"),
    ("google", "https://www.google.com"),
    ("twitter", "https://www.twitter.com"),
    ("instagram", "https://www.instagram.com"),
    ("github", "https://www.github.com"),
    ("linkedin", "https://www.linkedin.com"),
];

/// People with an encyclopedia lookup. Order matters: first match wins.
const FAMOUS_PEOPLE: &[&str] = &[
    "bill gates",
    "mark zuckerberg",
    "elon musk",
    "steve jobs",
    "warren buffet",
    "barack obama",
    "jeff bezos",
    "sundar pichai",
    "mukesh ambani",
    "virat kohli",
    "sachin tendulkar",
    "brian lara",
];

/// Website shortcuts keyed by lower-case site name
#[derive(Debug, Clone)]
pub struct WebsiteDirectory {
    sites: HashMap<String, String>,
}

impl Default for WebsiteDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl WebsiteDirectory {
    pub fn new() -> Self {
        Self {
            sites: WEBSITES
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
        }
    }

    /// URL for a site name, if known
    pub fn lookup(&self, site: &str) -> Option<&str> {
        self.sites.get(site).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Ordered list of recognized people
#[derive(Debug, Clone)]
pub struct PersonDirectory {
    names: Vec<String>,
}

impl Default for PersonDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonDirectory {
    pub fn new() -> Self {
        Self {
            names: FAMOUS_PEOPLE.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// First configured name contained in `command`
    pub fn first_match(&self, command: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| command.contains(name.as_str()))
            .map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
