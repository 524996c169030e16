//! Navigation methods for the App.

use tracing::{debug, info, warn};

use super::{App, Screen};
use crate::models::SpeakerField;
use crate::view_state::{ListTab, SessionDetailView, SpeakerDetailView};

impl App {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Push the detail screen for session `id`.
    pub fn open_session(&mut self, id: &str) {
        info!(session_id = id, "Opening session");
        let view = SessionDetailView::new(id, self.api.clone(), self.message_tx.clone());
        self.stack.push(Screen::Session(view));
        self.status = None;
    }

    /// Push the detail screen for speaker `username`.
    pub fn open_speaker(&mut self, username: &str) {
        info!(username, "Opening speaker");
        let view = SpeakerDetailView::new(username, self.api.clone(), self.message_tx.clone());
        self.stack.push(Screen::Speaker(view));
        self.status = None;
    }

    /// Pop the top screen. The list at the root stays put.
    pub fn go_back(&mut self) -> bool {
        let popped = self.stack.pop();
        if let Some(screen) = &popped {
            debug!(view_id = screen.id(), "Closed screen");
            self.status = None;
        }
        popped.is_some()
    }

    /// Refetch the screen in front from the network.
    pub fn refresh(&mut self) {
        match self.stack.last_mut() {
            Some(screen) => screen.refresh(),
            None => self.root.refresh(),
        }
        self.status = None;
    }

    pub fn select_next(&mut self) {
        match self.stack.last_mut() {
            Some(screen) => screen.select_next(),
            None => self.root.select_next(),
        }
    }

    pub fn select_prev(&mut self) {
        match self.stack.last_mut() {
            Some(screen) => screen.select_prev(),
            None => self.root.select_prev(),
        }
    }

    /// Switch between the sessions and speakers tabs on the list screen.
    pub fn toggle_tab(&mut self) {
        if self.stack.is_empty() {
            self.root.toggle_tab();
        }
    }

    /// Open whatever the cursor is on.
    pub fn open_selected(&mut self) {
        let target = match self.stack.last() {
            None => match self.root.tab() {
                ListTab::Sessions => self
                    .root
                    .selected_session()
                    .map(|s| Target::Session(s.id.clone())),
                ListTab::Speakers => self
                    .root
                    .selected_speaker()
                    .map(|s| Target::Speaker(s.username.clone())),
            },
            Some(Screen::Session(view)) => view
                .selected_speaker()
                .map(|s| Target::Speaker(s.username.clone())),
            Some(Screen::Speaker(view)) => view
                .selected_session()
                .map(|s| Target::Session(s.id.clone())),
        };

        match target {
            Some(Target::Session(id)) => self.open_session(&id),
            Some(Target::Speaker(username)) => self.open_speaker(&username),
            None => debug!("Nothing selected"),
        }
    }

    /// The website that `o` would open, if any.
    pub fn website(&self) -> Option<String> {
        let url = match self.stack.last() {
            Some(Screen::Speaker(view)) => view.website(),
            Some(Screen::Session(view)) => view
                .selected_speaker()
                .and_then(|s| s.known(SpeakerField::Url)),
            None => self
                .root
                .selected_speaker()
                .and_then(|s| s.known(SpeakerField::Url)),
        };
        url.map(str::to_string)
    }

    /// Open the relevant speaker website in the browser.
    pub fn open_website(&mut self) {
        let Some(url) = self.website() else {
            self.status = Some("No website to open".to_string());
            return;
        };

        match (self.open_url)(&url) {
            Ok(()) => {
                info!(url = %url, "Opened website");
                self.status = Some(format!("Opened {}", url));
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to open browser");
                self.status = Some(format!("Could not open browser: {}", e));
            }
        }
    }
}

enum Target {
    Session(String),
    Speaker(String),
}
