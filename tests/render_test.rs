//! Rendering with ratatui's TestBackend.

mod common;

use common::*;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;

use graphqlconf::app::App;
use graphqlconf::error::{ConferenceError, Entity};
use graphqlconf::ui;

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[tokio::test]
async fn test_loading_state() {
    let (app, _rx) = test_app(Arc::new(FakeApi::sample()));
    let screen = draw(&app, 80, 24);
    assert!(screen.contains("GraphQLConf"));
    assert!(screen.contains("Loading"));
}

#[tokio::test]
async fn test_session_list() {
    let (mut app, mut rx) = test_app(Arc::new(FakeApi::sample()));
    pump(&mut app, &mut rx).await;

    let screen = draw(&app, 80, 30);
    assert!(screen.contains("Sessions (3)"));
    assert!(screen.contains("Speakers (2)"));
    assert!(screen.contains("Federation at scale"));
    assert!(screen.contains("2025-09-08, 10:00:00 - 10:30:00"));
    assert!(screen.contains("TALK · KEYNOTE"));
    assert!(screen.contains("Venue: Room A"));
    assert!(screen.contains("Ada Lovelace"));
    assert!(screen.contains("All about federation at scale."));
}

#[tokio::test]
async fn test_session_list_truncates_description() {
    let mut long = session("s1", "Federation at scale", vec![speaker("ada", "Ada Lovelace")]);
    long.description = format!("Line one\n{}", "subgraph ".repeat(20));
    let api = Arc::new(FakeApi::new(vec![long], sample_speakers()));
    let (mut app, mut rx) = test_app(api);
    pump(&mut app, &mut rx).await;

    let screen = draw(&app, 60, 24);
    let line = screen
        .lines()
        .find(|l| l.contains("Line one subgraph"))
        .expect("description line rendered");
    assert!(line.contains('…'));
}

#[tokio::test]
async fn test_speaker_list_tab() {
    let (mut app, mut rx) = test_app(Arc::new(FakeApi::sample()));
    pump(&mut app, &mut rx).await;
    app.toggle_tab();

    let screen = draw(&app, 80, 24);
    assert!(screen.contains("Grace Hopper"));
    assert!(screen.contains("Engineer at Acme"));
    assert!(screen.contains("Berlin"));
}

#[tokio::test]
async fn test_error_shows_retry_hint() {
    let api = Arc::new(FakeApi::sample());
    api.fail_with(ConferenceError::GraphQl {
        operation: "GetSessions".to_string(),
        messages: vec!["Service unavailable".to_string()],
    });
    let (mut app, mut rx) = test_app(api);
    pump(&mut app, &mut rx).await;

    let screen = draw(&app, 80, 24);
    assert!(screen.contains("Service unavailable"));
    assert!(screen.contains("Press r to retry"));
}

#[tokio::test]
async fn test_session_not_found_screen() {
    let (mut app, mut rx) = test_app(Arc::new(FakeApi::sample()));
    pump(&mut app, &mut rx).await;
    app.open_session("missing");
    pump(&mut app, &mut rx).await;

    let screen = draw(&app, 80, 24);
    assert!(screen.contains(&ConferenceError::not_found(Entity::Session, "missing").user_message()));
}

#[tokio::test]
async fn test_session_detail() {
    let (mut app, mut rx) = test_app(Arc::new(FakeApi::sample()));
    pump(&mut app, &mut rx).await;
    app.open_session("s1");
    pump(&mut app, &mut rx).await;

    let screen = draw(&app, 80, 30);
    assert!(screen.contains("Federation at scale"));
    assert!(screen.contains("All about federation at scale."));
    assert!(screen.contains("Speakers"));
    assert!(screen.contains("Engineer at Acme · Berlin"));
    assert!(screen.contains("Esc back"));
}

#[tokio::test]
async fn test_speaker_detail() {
    let (mut app, mut rx) = test_app(Arc::new(FakeApi::sample()));
    pump(&mut app, &mut rx).await;
    app.open_speaker("grace");
    pump(&mut app, &mut rx).await;

    let screen = draw(&app, 80, 30);
    assert!(screen.contains("Speaker @grace"));
    assert!(screen.contains("Location: Berlin"));
    assert!(screen.contains("Website: https://grace.dev"));
    assert!(screen.contains("Years: 2024, 2025"));
    assert!(screen.contains("Sessions (2)"));
    assert!(screen.contains("Schema design"));
}

#[tokio::test]
async fn test_status_replaces_key_hints() {
    let (mut app, _rx) = test_app(Arc::new(FakeApi::sample()));
    app.status = Some("No website to open".to_string());
    let screen = draw(&app, 80, 24);
    assert!(screen.contains("No website to open"));
    assert!(!screen.contains("q quit"));
}
