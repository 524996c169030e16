//! Common test utilities for integration tests.
//!
//! Provides conference fixtures, a scriptable in-memory [`FakeApi`] and
//! helpers for driving the app's message channel.
//!
//! # Example
//!
//! ```ignore
//! let api = Arc::new(FakeApi::new(sample_sessions(), sample_speakers()));
//! let mut app = App::new(api.clone());
//! let mut rx = app.message_rx.take().unwrap();
//! pump(&mut app, &mut rx).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;

use graphqlconf::app::{App, AppMessage};
use graphqlconf::conference::ConferenceApi;
use graphqlconf::error::{ConferenceError, ConferenceResult};
use graphqlconf::graphql::FetchPolicy;
use graphqlconf::models::{Session, Speaker, SpeakerDetail};

// ============================================================================
// Fixtures
// ============================================================================

pub fn speaker(username: &str, name: &str) -> Speaker {
    Speaker {
        username: username.to_string(),
        name: name.to_string(),
        company: "Acme".to_string(),
        position: "Engineer".to_string(),
        about: format!("{} builds GraphQL servers.", name),
        location: "Berlin".to_string(),
        url: format!("https://{}.dev", username),
        avatar: String::new(),
        years: vec![2024, 2025],
        detail: SpeakerDetail::Full,
    }
}

pub fn session(id: &str, title: &str, speakers: Vec<Speaker>) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("All about {}.", title.to_lowercase()),
        start: "2025-09-08T10:00:00.000Z".to_string(),
        end: "2025-09-08T10:30:00.000Z".to_string(),
        event_type: "Talk".to_string(),
        event_subtype: "Keynote".to_string(),
        venue: Some("Room A".to_string()),
        speakers,
    }
}

pub fn sample_speakers() -> Vec<Speaker> {
    vec![speaker("ada", "Ada Lovelace"), speaker("grace", "Grace Hopper")]
}

pub fn sample_sessions() -> Vec<Session> {
    vec![
        session("s1", "Federation at scale", vec![speaker("ada", "Ada Lovelace")]),
        session("s2", "Schema design", vec![speaker("grace", "Grace Hopper")]),
        session(
            "s3",
            "Persisted queries",
            vec![speaker("grace", "Grace Hopper"), speaker("ada", "Ada Lovelace")],
        ),
    ]
}

// ============================================================================
// FakeApi
// ============================================================================

/// In-memory [`ConferenceApi`].
///
/// The failure is captured when a call starts, before any scripted delay, so
/// a slow call keeps the outcome it had when it was issued.
#[derive(Default)]
pub struct FakeApi {
    sessions: Vec<Session>,
    speakers: Vec<Speaker>,
    failure: Mutex<Option<ConferenceError>>,
    delays: Mutex<VecDeque<Duration>>,
    calls: Mutex<Vec<(String, FetchPolicy)>>,
}

impl FakeApi {
    pub fn new(sessions: Vec<Session>, speakers: Vec<Speaker>) -> Self {
        Self {
            sessions,
            speakers,
            ..Self::default()
        }
    }

    /// Sample data from [`sample_sessions`] and [`sample_speakers`].
    pub fn sample() -> Self {
        Self::new(sample_sessions(), sample_speakers())
    }

    /// Make every following call fail with `err`.
    pub fn fail_with(&self, err: ConferenceError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// Let following calls succeed again.
    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Delay the next call by `delay`.
    pub fn delay_next(&self, delay: Duration) {
        self.delays.lock().unwrap().push_back(delay);
    }

    pub fn calls(&self) -> Vec<(String, FetchPolicy)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_names(&self) -> Vec<String> {
        self.calls().into_iter().map(|(name, _)| name).collect()
    }

    async fn enter(&self, name: &str, policy: FetchPolicy) -> ConferenceResult<()> {
        self.calls.lock().unwrap().push((name.to_string(), policy));
        let failure = self.failure.lock().unwrap().clone();
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ConferenceApi for FakeApi {
    async fn list_sessions(&self, policy: FetchPolicy) -> ConferenceResult<Vec<Session>> {
        self.enter("list_sessions", policy).await?;
        Ok(self.sessions.clone())
    }

    async fn get_session(
        &self,
        id: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Option<Session>> {
        self.enter("get_session", policy).await?;
        Ok(self.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn list_speakers(&self, policy: FetchPolicy) -> ConferenceResult<Vec<Speaker>> {
        self.enter("list_speakers", policy).await?;
        Ok(self.speakers.clone())
    }

    async fn get_speaker(
        &self,
        username: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Option<Speaker>> {
        self.enter("get_speaker", policy).await?;
        Ok(self.speakers.iter().find(|s| s.username == username).cloned())
    }

    async fn sessions_for_speaker(
        &self,
        username: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Vec<Session>> {
        self.enter("sessions_for_speaker", policy).await?;
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.has_speaker(username))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Channel helpers
// ============================================================================

/// Wait for the next message, failing the test after a generous timeout.
pub async fn next_message(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a load result")
        .expect("message channel closed")
}

/// Deliver the next message to the app.
pub async fn pump(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    let msg = next_message(rx).await;
    app.handle_message(msg);
}

/// Build an app and take its receiver so tests can drive it.
pub fn test_app(
    api: std::sync::Arc<FakeApi>,
) -> (App, mpsc::UnboundedReceiver<AppMessage>) {
    let mut app = App::new(api).with_url_opener(|_| Ok(()));
    let rx = app.message_rx.take().expect("receiver present on a fresh app");
    (app, rx)
}
