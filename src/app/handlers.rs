//! Key and message handlers for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use super::{App, AppMessage, Screen};
use crate::view_state::{ViewId, ViewOutcome};

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ViewLoaded {
                view_id,
                generation,
                outcome,
            } => {
                if self.route_outcome(view_id, generation, outcome) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Deliver `outcome` to the live view with `view_id`.
    ///
    /// Results for screens that were closed, or for superseded fetches, are
    /// dropped.
    fn route_outcome(&mut self, view_id: ViewId, generation: u64, outcome: ViewOutcome) -> bool {
        if self.root.id() == view_id {
            return match outcome {
                ViewOutcome::Conference(result) => self.root.apply(generation, result),
                other => mismatched(view_id, &other),
            };
        }

        let Some(screen) = self.stack.iter_mut().find(|s| s.id() == view_id) else {
            debug!(view_id, "Dropping result for closed screen");
            return false;
        };

        match (screen, outcome) {
            (Screen::Session(view), ViewOutcome::Session(result)) => view.apply(generation, result),
            (Screen::Speaker(view), ViewOutcome::Speaker(result)) => view.apply(generation, result),
            (_, other) => mismatched(view_id, &other),
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.quit();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc | KeyCode::Backspace => {
                self.go_back();
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => {
                if matches!(self.stack.last(), Some(Screen::Session(_))) {
                    self.select_prev();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if matches!(self.stack.last(), Some(Screen::Session(_))) {
                    self.select_next();
                }
            }
            KeyCode::Tab | KeyCode::BackTab => self.toggle_tab(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('o') => self.open_website(),
            _ => {}
        }
    }
}

fn mismatched(view_id: ViewId, outcome: &ViewOutcome) -> bool {
    warn!(view_id, ?outcome, "Outcome does not match screen kind");
    false
}
