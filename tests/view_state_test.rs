//! View-state lifecycle: initial load, failures, refresh and supersession.

mod common;

use common::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use graphqlconf::app::AppMessage;
use graphqlconf::error::{ConferenceError, NetworkError};
use graphqlconf::graphql::FetchPolicy;
use graphqlconf::view_state::{
    fetch_speaker_profile, ConferenceListView, ListTab, LoadState, SessionDetailView,
    SpeakerDetailView, ViewOutcome,
};

fn channel() -> (
    mpsc::UnboundedSender<AppMessage>,
    mpsc::UnboundedReceiver<AppMessage>,
) {
    mpsc::unbounded_channel()
}

fn connection_failed() -> ConferenceError {
    ConferenceError::Network(NetworkError::ConnectionFailed {
        url: "https://graphqlconf.app/graphql".to_string(),
        message: "refused".to_string(),
    })
}

macro_rules! apply_next {
    ($view:expr, $rx:expr, $variant:ident) => {{
        let AppMessage::ViewLoaded {
            view_id,
            generation,
            outcome,
        } = next_message($rx).await;
        assert_eq!(view_id, $view.id());
        match outcome {
            ViewOutcome::$variant(result) => $view.apply(generation, result),
            other => panic!("unexpected outcome {:?}", other),
        }
    }};
}

#[tokio::test]
async fn test_list_loads_sessions_then_speakers() {
    let api = Arc::new(FakeApi::sample());
    let (tx, mut rx) = channel();

    let mut view = ConferenceListView::new(api.clone(), tx);
    assert!(view.state().is_loading());
    assert_eq!(view.generation(), 1);

    assert!(apply_next!(view, &mut rx, Conference));
    let data = view.state().data().unwrap();
    assert_eq!(data.sessions.len(), 3);
    assert_eq!(data.speakers.len(), 2);

    assert_eq!(api.call_names(), vec!["list_sessions", "list_speakers"]);
    assert!(api
        .calls()
        .iter()
        .all(|(_, policy)| *policy == FetchPolicy::CacheFirst));

    // Exactly one result per construction.
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_list_failure_shows_user_message() {
    let api = Arc::new(FakeApi::sample());
    api.fail_with(connection_failed());
    let (tx, mut rx) = channel();

    let mut view = ConferenceListView::new(api.clone(), tx);
    apply_next!(view, &mut rx, Conference);

    let message = view.state().error().unwrap();
    assert!(message.contains("Unable to connect"));
    // Speakers are never requested once sessions fail.
    assert_eq!(api.call_names(), vec!["list_sessions"]);
}

#[tokio::test]
async fn test_refresh_uses_network_and_recovers() {
    let api = Arc::new(FakeApi::sample());
    api.fail_with(connection_failed());
    let (tx, mut rx) = channel();

    let mut view = ConferenceListView::new(api.clone(), tx);
    apply_next!(view, &mut rx, Conference);
    assert!(matches!(view.state(), LoadState::Failed(_)));

    api.succeed();
    view.refresh();
    assert!(view.state().is_loading());
    assert_eq!(view.generation(), 2);

    apply_next!(view, &mut rx, Conference);
    assert!(view.state().data().is_some());

    let (_, policy) = api.calls().last().cloned().unwrap();
    assert_eq!(policy, FetchPolicy::NetworkOnly);
}

#[tokio::test(start_paused = true)]
async fn test_slow_superseded_fetch_is_dropped() {
    let api = Arc::new(FakeApi::sample());
    let (tx, mut rx) = channel();

    // First fetch fails, slowly.
    api.fail_with(connection_failed());
    api.delay_next(Duration::from_millis(500));
    let mut view = ConferenceListView::new(api.clone(), tx);
    while api.calls().is_empty() {
        tokio::task::yield_now().await;
    }

    // Second fetch succeeds straight away.
    api.succeed();
    view.refresh();

    assert!(apply_next!(view, &mut rx, Conference));
    assert!(view.state().data().is_some());

    // The first fetch lands afterwards and must not clobber the data.
    assert!(!apply_next!(view, &mut rx, Conference));
    assert!(view.state().data().is_some());
}

#[tokio::test]
async fn test_tab_and_selection() {
    let api = Arc::new(FakeApi::sample());
    let (tx, mut rx) = channel();
    let mut view = ConferenceListView::new(api, tx);

    // Nothing to select while loading.
    view.select_next();
    assert!(view.selected_session().is_none());

    apply_next!(view, &mut rx, Conference);
    view.select_next();
    assert_eq!(view.selected_session().unwrap().id, "s2");
    assert!(view.selected_speaker().is_none());

    view.toggle_tab();
    assert_eq!(view.tab(), ListTab::Speakers);
    assert_eq!(view.selected_speaker().unwrap().username, "ada");
    view.select_next();
    view.select_next();
    assert_eq!(view.selected_speaker().unwrap().username, "grace");

    // Each tab keeps its own cursor.
    view.toggle_tab();
    assert_eq!(view.selected_session().unwrap().id, "s2");
}

#[tokio::test]
async fn test_session_detail_loaded() {
    let api = Arc::new(FakeApi::sample());
    let (tx, mut rx) = channel();

    let mut view = SessionDetailView::new("s3", api.clone(), tx);
    assert_eq!(view.session_id(), "s3");
    apply_next!(view, &mut rx, Session);

    let session = view.state().data().unwrap();
    assert_eq!(session.title, "Persisted queries");
    assert_eq!(view.selected_speaker().unwrap().username, "grace");
    view.select_next();
    assert_eq!(view.selected_speaker().unwrap().username, "ada");
    assert_eq!(api.call_names(), vec!["get_session"]);
}

#[tokio::test]
async fn test_session_not_found() {
    let api = Arc::new(FakeApi::sample());
    let (tx, mut rx) = channel();

    let mut view = SessionDetailView::new("missing", api, tx);
    apply_next!(view, &mut rx, Session);
    assert_eq!(view.state().error(), Some("Session not found"));
}

#[tokio::test]
async fn test_speaker_detail_loads_profile_and_sessions() {
    let api = Arc::new(FakeApi::sample());
    let (tx, mut rx) = channel();

    let mut view = SpeakerDetailView::new("ada", api.clone(), tx);
    apply_next!(view, &mut rx, Speaker);

    let profile = view.state().data().unwrap();
    assert_eq!(profile.speaker.name, "Ada Lovelace");
    let ids: Vec<_> = profile.sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s3"]);
    assert_eq!(view.website(), Some("https://ada.dev"));
    assert_eq!(api.call_names(), vec!["get_speaker", "sessions_for_speaker"]);
}

#[tokio::test]
async fn test_speaker_not_found_skips_session_lookup() {
    let api = Arc::new(FakeApi::sample());
    let (tx, mut rx) = channel();

    let mut view = SpeakerDetailView::new("nobody", api.clone(), tx);
    apply_next!(view, &mut rx, Speaker);

    assert_eq!(view.state().error(), Some("Speaker not found"));
    assert_eq!(api.call_names(), vec!["get_speaker"]);
    assert_eq!(view.website(), None);
}

#[tokio::test]
async fn test_speaker_with_no_sessions() {
    let api = FakeApi::new(Vec::new(), sample_speakers());
    let profile = fetch_speaker_profile(&api, "grace", FetchPolicy::CacheFirst)
        .await
        .unwrap();
    assert!(profile.sessions.is_empty());
}
