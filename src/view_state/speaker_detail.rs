//! A speaker's profile and the sessions they present.

use std::sync::Arc;

use tracing::info;

use super::{
    failure_message, next_view_id, spawn_fetch, LoadState, Loadable, MessageSender, Selection,
    ViewId, ViewOutcome,
};
use crate::conference::{ConferenceApi, SharedApi};
use crate::error::{ConferenceError, ConferenceResult, Entity};
use crate::graphql::FetchPolicy;
use crate::models::{Session, Speaker, SpeakerField};

/// A speaker together with their sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerProfile {
    pub speaker: Speaker,
    pub sessions: Vec<Session>,
}

/// Load the speaker first, then their sessions.
///
/// The session lookup is skipped when the speaker does not exist.
pub async fn fetch_speaker_profile(
    api: &dyn ConferenceApi,
    username: &str,
    policy: FetchPolicy,
) -> ConferenceResult<SpeakerProfile> {
    let speaker = api
        .get_speaker(username, policy)
        .await?
        .ok_or_else(|| ConferenceError::not_found(Entity::Speaker, username))?;
    let sessions = api.sessions_for_speaker(username, policy).await?;
    Ok(SpeakerProfile { speaker, sessions })
}

pub struct SpeakerDetailView {
    id: ViewId,
    username: String,
    api: SharedApi,
    tx: MessageSender,
    load: Loadable<SpeakerProfile>,
    session: Selection,
}

impl SpeakerDetailView {
    pub fn new(username: impl Into<String>, api: SharedApi, tx: MessageSender) -> Self {
        let mut view = Self {
            id: next_view_id(),
            username: username.into(),
            api,
            tx,
            load: Loadable::new(),
            session: Selection::new(),
        };
        view.fetch(FetchPolicy::CacheFirst);
        view
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn state(&self) -> &LoadState<SpeakerProfile> {
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
        info!(view_id = self.id, generation, username = %self.username, "Loading speaker");
        let api = Arc::clone(&self.api);
        let username = self.username.clone();
        spawn_fetch(self.tx.clone(), self.id, generation, async move {
            ViewOutcome::Speaker(fetch_speaker_profile(api.as_ref(), &username, policy).await)
        });
    }

    pub fn apply(&mut self, generation: u64, outcome: ConferenceResult<SpeakerProfile>) -> bool {
        let id = self.id;
        let applied = self
            .load
            .resolve(generation, outcome.map_err(|err| failure_message(id, &err)));
        if applied {
            if let Some(profile) = self.load.state().data() {
                self.session.clamp(profile.sessions.len());
            }
        }
        applied
    }

    pub fn selection(&self) -> Selection {
        self.session
    }

    pub fn select_next(&mut self) {
        let len = self.load.state().data().map_or(0, |p| p.sessions.len());
        self.session.next(len);
    }

    pub fn select_prev(&mut self) {
        self.session.prev();
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.session.pick(&self.load.state().data()?.sessions)
    }

    /// The speaker's website, once loaded and non-empty.
    pub fn website(&self) -> Option<&str> {
        self.load
            .state()
            .data()?
            .speaker
            .known(SpeakerField::Url)
    }
}

impl std::fmt::Debug for SpeakerDetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeakerDetailView")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("state", &self.load.state().phase())
            .finish()
    }
}
