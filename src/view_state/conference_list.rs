//! The root screen: session and speaker tabs.

use std::sync::Arc;

use tracing::info;

use super::{
    failure_message, next_view_id, spawn_fetch, LoadState, Loadable, MessageSender, Selection,
    ViewId, ViewOutcome,
};
use crate::conference::{ConferenceApi, SharedApi};
use crate::error::ConferenceResult;
use crate::graphql::FetchPolicy;
use crate::models::{Session, Speaker};

/// Everything the list screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferenceData {
    pub sessions: Vec<Session>,
    pub speakers: Vec<Speaker>,
}

/// Which list is in front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListTab {
    #[default]
    Sessions,
    Speakers,
}

impl ListTab {
    pub fn toggle(self) -> Self {
        match self {
            ListTab::Sessions => ListTab::Speakers,
            ListTab::Speakers => ListTab::Sessions,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListTab::Sessions => "Sessions",
            ListTab::Speakers => "Speakers",
        }
    }
}

/// Load sessions, then speakers. Either failure fails the whole load.
pub async fn fetch_conference(
    api: &dyn ConferenceApi,
    policy: FetchPolicy,
) -> ConferenceResult<ConferenceData> {
    let sessions = api.list_sessions(policy).await?;
    let speakers = api.list_speakers(policy).await?;
    Ok(ConferenceData { sessions, speakers })
}

pub struct ConferenceListView {
    id: ViewId,
    api: SharedApi,
    tx: MessageSender,
    load: Loadable<ConferenceData>,
    tab: ListTab,
    sessions: Selection,
    speakers: Selection,
}

impl ConferenceListView {
    /// Create the view and start loading with the cache allowed.
    pub fn new(api: SharedApi, tx: MessageSender) -> Self {
        let mut view = Self {
            id: next_view_id(),
            api,
            tx,
            load: Loadable::new(),
            tab: ListTab::default(),
            sessions: Selection::new(),
            speakers: Selection::new(),
        };
        view.fetch(FetchPolicy::CacheFirst);
        view
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn state(&self) -> &LoadState<ConferenceData> {
        self.load.state()
    }

    pub fn generation(&self) -> u64 {
        self.load.generation()
    }

    /// Reload from the network.
    pub fn refresh(&mut self) {
        self.fetch(FetchPolicy::NetworkOnly);
    }

    fn fetch(&mut self, policy: FetchPolicy) {
        let generation = self.load.begin();
        info!(view_id = self.id, generation, ?policy, "Loading conference");
        let api = Arc::clone(&self.api);
        spawn_fetch(self.tx.clone(), self.id, generation, async move {
            ViewOutcome::Conference(fetch_conference(api.as_ref(), policy).await)
        });
    }

    /// Apply a finished load. Returns whether it was current.
    pub fn apply(&mut self, generation: u64, outcome: ConferenceResult<ConferenceData>) -> bool {
        let id = self.id;
        let applied = self
            .load
            .resolve(generation, outcome.map_err(|err| failure_message(id, &err)));
        if applied {
            if let Some(data) = self.load.state().data() {
                self.sessions.clamp(data.sessions.len());
                self.speakers.clamp(data.speakers.len());
            }
        }
        applied
    }

    pub fn tab(&self) -> ListTab {
        self.tab
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
    }

    /// Cursor for the tab in front.
    pub fn selection(&self) -> Selection {
        match self.tab {
            ListTab::Sessions => self.sessions,
            ListTab::Speakers => self.speakers,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        match self.tab {
            ListTab::Sessions => self.sessions.next(len),
            ListTab::Speakers => self.speakers.next(len),
        }
    }

    pub fn select_prev(&mut self) {
        match self.tab {
            ListTab::Sessions => self.sessions.prev(),
            ListTab::Speakers => self.speakers.prev(),
        }
    }

    fn visible_len(&self) -> usize {
        match (self.tab, self.load.state().data()) {
            (ListTab::Sessions, Some(data)) => data.sessions.len(),
            (ListTab::Speakers, Some(data)) => data.speakers.len(),
            (_, None) => 0,
        }
    }

    /// Session under the cursor when the sessions tab is in front.
    pub fn selected_session(&self) -> Option<&Session> {
        if self.tab != ListTab::Sessions {
            return None;
        }
        self.sessions.pick(&self.load.state().data()?.sessions)
    }

    /// Speaker under the cursor when the speakers tab is in front.
    pub fn selected_speaker(&self) -> Option<&Speaker> {
        if self.tab != ListTab::Speakers {
            return None;
        }
        self.speakers.pick(&self.load.state().data()?.speakers)
    }
}

impl std::fmt::Debug for ConferenceListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConferenceListView")
            .field("id", &self.id)
            .field("state", &self.load.state().phase())
            .field("tab", &self.tab)
            .finish()
    }
}
