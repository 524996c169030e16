//! Screen types pushed on top of the conference list.

use crate::view_state::{SessionDetailView, SpeakerDetailView, ViewId};

/// A detail screen on the navigation stack.
#[derive(Debug)]
pub enum Screen {
    Session(SessionDetailView),
    Speaker(SpeakerDetailView),
}

impl Screen {
    pub fn id(&self) -> ViewId {
        match self {
            Screen::Session(view) => view.id(),
            Screen::Speaker(view) => view.id(),
        }
    }

    pub fn refresh(&mut self) {
        match self {
            Screen::Session(view) => view.refresh(),
            Screen::Speaker(view) => view.refresh(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Screen::Session(view) => view.state().is_loading(),
            Screen::Speaker(view) => view.state().is_loading(),
        }
    }

    pub fn select_next(&mut self) {
        match self {
            Screen::Session(view) => view.select_next(),
            Screen::Speaker(view) => view.select_next(),
        }
    }

    pub fn select_prev(&mut self) {
        match self {
            Screen::Session(view) => view.select_prev(),
            Screen::Speaker(view) => view.select_prev(),
        }
    }
}

/// Which screen is in front, borrowed for rendering.
#[derive(Debug, Clone, Copy)]
pub enum ActiveView<'a> {
    List(&'a crate::view_state::ConferenceListView),
    Session(&'a SessionDetailView),
    Speaker(&'a SpeakerDetailView),
}
