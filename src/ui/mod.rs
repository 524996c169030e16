//! UI rendering.
//!
//! Every frame is a header, the body of the screen in front, and a footer
//! with key hints or the latest status message. Rendering only reads from
//! [`App`]; all state changes happen in the app handlers.

mod components;
mod conference_list;
pub mod format;
mod helpers;
mod session_detail;
mod speaker_detail;
mod theme;

pub use helpers::truncate;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{ActiveView, App};
use conference_list::render_conference_list;
use session_detail::render_session_detail;
use speaker_detail::render_speaker_detail;

/// Horizontal padding around the body
const BODY_MARGIN: u16 = 1;

/// Render the screen in front.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);

    let body = Rect {
        x: body.x + BODY_MARGIN,
        width: body.width.saturating_sub(BODY_MARGIN * 2),
        ..body
    };
    match app.active_view() {
        ActiveView::List(view) => render_conference_list(frame, body, view, app.tick_count),
        ActiveView::Session(view) => render_session_detail(frame, body, view, app.tick_count),
        ActiveView::Speaker(view) => render_speaker_detail(frame, body, view, app.tick_count),
    }

    render_footer(frame, footer, app);
}

/// Title of the screen in front.
pub fn screen_title(view: ActiveView<'_>) -> String {
    match view {
        ActiveView::List(_) => "Schedule".to_string(),
        ActiveView::Session(_) => "Session".to_string(),
        ActiveView::Speaker(view) => format!("Speaker @{}", view.username()),
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " GraphQLConf",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(" › ", Style::default().fg(COLOR_DIM)));
    spans.push(Span::styled(
        screen_title(app.active_view()),
        Style::default().fg(COLOR_ACCENT),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

/// Key hints for the screen in front.
pub fn key_hints(view: ActiveView<'_>) -> &'static str {
    match view {
        ActiveView::List(_) => "↑↓ move  Tab switch  Enter open  o website  r refresh  q quit",
        ActiveView::Session(_) => "←→ speakers  Enter open speaker  o website  r refresh  Esc back",
        ActiveView::Speaker(_) => "↑↓ sessions  Enter open session  o website  r refresh  Esc back",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(COLOR_ACCENT),
        )),
        None => Line::from(Span::styled(
            format!(" {}", key_hints(app.active_view())),
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
