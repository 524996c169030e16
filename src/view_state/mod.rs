//! Per-screen view-state.
//!
//! Each screen owns a view that fetches its data through the shared
//! [`ConferenceApi`](crate::conference::ConferenceApi), tracks the
//! [`LoadState`] lifecycle and exposes selection cursors for the UI.
//!
//! Fetches run on `tokio::spawn` and report back to the app loop as
//! [`AppMessage::ViewLoaded`](crate::app::AppMessage::ViewLoaded). The app
//! routes each message by [`ViewId`] and the view applies it only if its
//! generation token is still current:
//!
//! ```text
//! view.refresh() ── begin() ──► token n ──► tokio::spawn(fetch)
//!                                                 │
//!     App::handle_message ◄── ViewLoaded{id, n} ──┘
//!            │
//!            └──► view.apply(n, outcome)   (ignored if n is stale)
//! ```

mod conference_list;
mod load_state;
mod selection;
mod session_detail;
mod speaker_detail;

pub use conference_list::{fetch_conference, ConferenceData, ConferenceListView, ListTab};
pub use load_state::{LoadState, Loadable};
pub use selection::Selection;
pub use session_detail::{fetch_session, SessionDetailView};
pub use speaker_detail::{fetch_speaker_profile, SpeakerDetailView, SpeakerProfile};

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::AppMessage;
use crate::error::{ConferenceError, ConferenceResult};
use crate::models::Session;

/// Identifies one live screen instance.
pub type ViewId = u64;

/// Sender half of the app message channel.
pub type MessageSender = mpsc::UnboundedSender<AppMessage>;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate an id no other view in this process has used.
pub fn next_view_id() -> ViewId {
    NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed)
}

/// Result of one background fetch, tagged by screen kind.
#[derive(Debug, Clone)]
pub enum ViewOutcome {
    Conference(ConferenceResult<ConferenceData>),
    Session(ConferenceResult<Session>),
    Speaker(ConferenceResult<SpeakerProfile>),
}

/// Run `fetch` in the background and post its outcome to the app.
pub(crate) fn spawn_fetch<F>(tx: MessageSender, view_id: ViewId, generation: u64, fetch: F)
where
    F: Future<Output = ViewOutcome> + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = fetch.await;
        if tx
            .send(AppMessage::ViewLoaded {
                view_id,
                generation,
                outcome,
            })
            .is_err()
        {
            debug!(view_id, "App channel closed, discarding load result");
        }
    });
}

/// Message shown for a failed load.
pub(crate) fn failure_message(view_id: ViewId, err: &ConferenceError) -> String {
    warn!(view_id, code = err.error_code(), error = %err, "Load failed");
    let message = err.user_message();
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}
