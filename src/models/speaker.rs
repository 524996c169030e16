//! Speaker record and field coverage tracking.

/// Which query shape produced a [`Speaker`].
///
/// The four conference queries select different subsets of speaker fields.
/// Rather than guessing from empty strings, every record remembers where it
/// came from so callers can ask whether a field was fetched at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpeakerDetail {
    /// Embedded in the lightweight session list: username, name, avatar.
    Summary,
    /// From the speaker directory: adds company and position.
    Listing,
    /// Embedded in session details: adds about, location and url.
    Profile,
    /// From speaker details: every field including attendance years.
    Full,
}

/// Optional speaker fields whose presence depends on [`SpeakerDetail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerField {
    Company,
    Position,
    About,
    Location,
    Url,
    Years,
}

impl SpeakerDetail {
    /// Whether records of this detail level carry `field` from the server.
    pub fn covers(self, field: SpeakerField) -> bool {
        match field {
            SpeakerField::Company | SpeakerField::Position => self != SpeakerDetail::Summary,
            SpeakerField::About | SpeakerField::Location | SpeakerField::Url => {
                matches!(self, SpeakerDetail::Profile | SpeakerDetail::Full)
            }
            SpeakerField::Years => self == SpeakerDetail::Full,
        }
    }
}

/// A conference presenter, keyed by `username`.
///
/// Fields not selected by the producing query are empty (never absent);
/// use [`Speaker::has`] to distinguish "unfetched" from "empty on the server".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    pub username: String,
    pub name: String,
    pub company: String,
    pub position: String,
    pub about: String,
    pub location: String,
    pub url: String,
    pub avatar: String,
    /// Years the speaker attended.
    pub years: Vec<i32>,
    pub detail: SpeakerDetail,
}

impl Speaker {
    /// A record with only the always-selected fields populated.
    pub fn summary(
        username: impl Into<String>,
        name: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            company: String::new(),
            position: String::new(),
            about: String::new(),
            location: String::new(),
            url: String::new(),
            avatar: avatar.into(),
            years: Vec::new(),
            detail: SpeakerDetail::Summary,
        }
    }

    /// Whether `field` was fetched for this record.
    pub fn has(&self, field: SpeakerField) -> bool {
        self.detail.covers(field)
    }

    /// `Some(value)` when `field` was fetched and is non-empty.
    pub fn known(&self, field: SpeakerField) -> Option<&str> {
        if !self.has(field) {
            return None;
        }
        let value = match field {
            SpeakerField::Company => &self.company,
            SpeakerField::Position => &self.position,
            SpeakerField::About => &self.about,
            SpeakerField::Location => &self.location,
            SpeakerField::Url => &self.url,
            SpeakerField::Years => return None,
        };
        let trimmed = value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// "position at company", degrading gracefully when either is missing.
    pub fn headline(&self) -> Option<String> {
        match (
            self.known(SpeakerField::Position),
            self.known(SpeakerField::Company),
        ) {
            (Some(position), Some(company)) => Some(format!("{} at {}", position, company)),
            (Some(position), None) => Some(position.to_string()),
            (None, Some(company)) => Some(company.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_covers_only_identity_fields() {
        let speaker = Speaker::summary("ada", "Ada Lovelace", "https://img/ada.png");
        for field in [
            SpeakerField::Company,
            SpeakerField::Position,
            SpeakerField::About,
            SpeakerField::Location,
            SpeakerField::Url,
            SpeakerField::Years,
        ] {
            assert!(!speaker.has(field), "{:?} should not be covered", field);
        }
        assert!(speaker.about.is_empty());
        assert!(speaker.years.is_empty());
    }

    #[test]
    fn test_detail_coverage() {
        assert!(SpeakerDetail::Listing.covers(SpeakerField::Company));
        assert!(!SpeakerDetail::Listing.covers(SpeakerField::About));
        assert!(SpeakerDetail::Profile.covers(SpeakerField::Url));
        assert!(!SpeakerDetail::Profile.covers(SpeakerField::Years));
        assert!(SpeakerDetail::Full.covers(SpeakerField::Years));
    }

    #[test]
    fn test_known_skips_unfetched_and_blank() {
        let mut speaker = Speaker::summary("ada", "Ada", "");
        speaker.company = "Analytical Engines".to_string();
        // Company set locally but a summary never fetched it
        assert_eq!(speaker.known(SpeakerField::Company), None);

        speaker.detail = SpeakerDetail::Listing;
        assert_eq!(speaker.known(SpeakerField::Company), Some("Analytical Engines"));
        speaker.company = "   ".to_string();
        assert_eq!(speaker.known(SpeakerField::Company), None);
    }

    #[test]
    fn test_headline() {
        let mut speaker = Speaker::summary("ada", "Ada", "");
        speaker.detail = SpeakerDetail::Listing;
        assert_eq!(speaker.headline(), None);

        speaker.position = "Engineer".to_string();
        assert_eq!(speaker.headline().as_deref(), Some("Engineer"));

        speaker.company = "Acme".to_string();
        assert_eq!(speaker.headline().as_deref(), Some("Engineer at Acme"));

        speaker.position.clear();
        assert_eq!(speaker.headline().as_deref(), Some("Acme"));
    }
}
