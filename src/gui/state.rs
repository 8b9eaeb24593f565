//! State types for the Friday GUI
//!
//! [`AssistantState`] is also what the CLI keeps between commands.

use crate::commands::Reply;
use tracing::debug;

/// What the user sees: last transcript, last information, listening flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantState {
    pub transcript: String,
    pub information: String,
    listening: bool,
    /// Bumped per transcript; replies for older transcripts are dropped
    ticket: u64,
}

impl AssistantState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// idle -> listening. Returns false if a capture is already running.
    pub fn begin_listening(&mut self) -> bool {
        if self.listening {
            debug!("Capture already running, ignoring start");
            return false;
        }
        self.listening = true;
        true
    }

    /// listening -> idle, with or without a result
    pub fn finish_listening(&mut self) {
        self.listening = false;
    }

    /// Store a new transcript. Returns the ticket its reply must carry.
    pub fn record_transcript(&mut self, transcript: &str) -> u64 {
        self.transcript = transcript.to_string();
        self.ticket += 1;
        self.ticket
    }

    /// Show `reply` if it answers the latest transcript
    pub fn apply(&mut self, ticket: u64, reply: &Reply) -> bool {
        if ticket != self.ticket {
            debug!("Dropping stale reply for ticket {} (latest {})", ticket, self.ticket);
            return false;
        }
        self.information = reply.information.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Branch;

    #[test]
    fn test_single_capture_at_a_time() {
        let mut state = AssistantState::new();
        assert!(!state.is_listening());
        assert!(state.begin_listening());
        assert!(!state.begin_listening());
        assert!(state.is_listening());

        state.finish_listening();
        assert!(!state.is_listening());
        assert!(state.begin_listening());
    }

    #[test]
    fn test_finish_without_result_clears_listening() {
        let mut state = AssistantState::new();
        state.begin_listening();
        state.finish_listening();
        assert!(!state.is_listening());
        assert!(state.transcript.is_empty());
    }

    fn reply(branch: Branch, information: &str) -> Reply {
        Reply {
            branch,
            spoken: information.to_string(),
            information: information.to_string(),
        }
    }

    #[test]
    fn test_apply_reply() {
        let mut state = AssistantState::new();
        let ticket = state.record_transcript("open github");
        assert!(state.apply(ticket, &reply(Branch::OpenedSite, "Opened github")));
        assert_eq!(state.transcript, "open github");
        assert_eq!(state.information, "Opened github");
    }

    #[test]
    fn test_late_reply_does_not_overwrite_newer() {
        let mut state = AssistantState::new();
        let slow = state.record_transcript("who is bill gates");
        let fast = state.record_transcript("open github");

        assert!(state.apply(fast, &reply(Branch::OpenedSite, "Opened github")));
        assert!(!state.apply(slow, &reply(Branch::PersonSummary, "Bill Gates, x")));
        assert_eq!(state.transcript, "open github");
        assert_eq!(state.information, "Opened github");
    }
}
