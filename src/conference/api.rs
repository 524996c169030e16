//! The data-access contract shared by every screen.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ConferenceResult;
use crate::graphql::FetchPolicy;
use crate::models::{Session, Speaker};

/// Asynchronous conference queries.
///
/// Lookups that find nothing return `Ok(None)` or an empty list; only
/// transport, GraphQL and decode faults are errors.
#[async_trait]
pub trait ConferenceApi: Send + Sync {
    /// All sessions, with summary speakers.
    async fn list_sessions(&self, policy: FetchPolicy) -> ConferenceResult<Vec<Session>>;

    /// The session with `id`, with profile speakers.
    async fn get_session(&self, id: &str, policy: FetchPolicy)
        -> ConferenceResult<Option<Session>>;

    /// The speaker directory. `years` is always empty here.
    async fn list_speakers(&self, policy: FetchPolicy) -> ConferenceResult<Vec<Speaker>>;

    /// The speaker with `username`, including attendance years.
    async fn get_speaker(
        &self,
        username: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Option<Speaker>>;

    /// Sessions that list `username` among their speakers.
    async fn sessions_for_speaker(
        &self,
        username: &str,
        policy: FetchPolicy,
    ) -> ConferenceResult<Vec<Session>>;
}

/// Handle passed to every view-state.
pub type SharedApi = Arc<dyn ConferenceApi>;
