//! A single session with its speakers.

use std::sync::Arc;

use tracing::info;

use super::{
    failure_message, next_view_id, spawn_fetch, LoadState, Loadable, MessageSender, Selection,
    ViewId, ViewOutcome,
};
use crate::conference::{ConferenceApi, SharedApi};
use crate::error::{ConferenceError, ConferenceResult, Entity};
use crate::graphql::FetchPolicy;
use crate::models::{Session, Speaker};

/// Look up one session, turning an absent record into a not-found error.
pub async fn fetch_session(
    api: &dyn ConferenceApi,
    id: &str,
    policy: FetchPolicy,
) -> ConferenceResult<Session> {
    api.get_session(id, policy)
        .await?
        .ok_or_else(|| ConferenceError::not_found(Entity::Session, id))
}

pub struct SessionDetailView {
    id: ViewId,
    session_id: String,
    api: SharedApi,
    tx: MessageSender,
    load: Loadable<Session>,
    speaker: Selection,
}

impl SessionDetailView {
    pub fn new(session_id: impl Into<String>, api: SharedApi, tx: MessageSender) -> Self {
        let mut view = Self {
            id: next_view_id(),
            session_id: session_id.into(),
            api,
            tx,
            load: Loadable::new(),
            speaker: Selection::new(),
        };
        view.fetch(FetchPolicy::CacheFirst);
        view
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> &LoadState<Session> {
        self.load.state()
    }

    pub fn generation(&self) -> u64 {
        self.load.generation()
    }

    pub fn refresh(&mut self) {
        self.fetch(FetchPolicy::NetworkOnly);
    }

    fn fetch(&mut self, policy: FetchPolicy) {
        let generation = self.load.begin();
        info!(view_id = self.id, generation, session_id = %self.session_id, "Loading session");
        let api = Arc::clone(&self.api);
        let session_id = self.session_id.clone();
        spawn_fetch(self.tx.clone(), self.id, generation, async move {
            ViewOutcome::Session(fetch_session(api.as_ref(), &session_id, policy).await)
        });
    }

    pub fn apply(&mut self, generation: u64, outcome: ConferenceResult<Session>) -> bool {
        let id = self.id;
        let applied = self
            .load
            .resolve(generation, outcome.map_err(|err| failure_message(id, &err)));
        if applied {
            if let Some(session) = self.load.state().data() {
                self.speaker.clamp(session.speakers.len());
            }
        }
        applied
    }

    pub fn selection(&self) -> Selection {
        self.speaker
    }

    pub fn select_next(&mut self) {
        let len = self.load.state().data().map_or(0, |s| s.speakers.len());
        self.speaker.next(len);
    }

    pub fn select_prev(&mut self) {
        self.speaker.prev();
    }

    pub fn selected_speaker(&self) -> Option<&Speaker> {
        self.speaker.pick(&self.load.state().data()?.speakers)
    }
}

impl std::fmt::Debug for SessionDetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDetailView")
            .field("id", &self.id)
            .field("session_id", &self.session_id)
            .field("state", &self.load.state().phase())
            .finish()
    }
}
