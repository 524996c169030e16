//! Session record.

use super::speaker::Speaker;

/// A scheduled talk or workshop.
///
/// `start` and `end` are kept exactly as the server sent them; formatting
/// happens at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub event_type: String,
    pub event_subtype: String,
    pub venue: Option<String>,
    /// Speakers in server order. Their detail level depends on the query.
    pub speakers: Vec<Speaker>,
}

impl Session {
    /// Whether any listed speaker has the given username.
    pub fn has_speaker(&self, username: &str) -> bool {
        self.speakers.iter().any(|s| s.username == username)
    }

    /// Venue, ignoring blank values and a literal `"null"`.
    pub fn venue(&self) -> Option<&str> {
        self.venue
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != "null")
    }
}
