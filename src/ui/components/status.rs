//! Placeholders for screens that have no data to show yet.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::helpers::spinner_frame;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::view_state::LoadState;

/// Lines describing a non-loaded state. Empty once data is loaded.
pub fn status_lines<T>(state: &LoadState<T>, tick: u64) -> Vec<Line<'static>> {
    match state {
        LoadState::Idle | LoadState::Loaded(_) => Vec::new(),
        LoadState::Loading => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(tick)),
                    Style::default().fg(COLOR_LOADING),
                ),
                Span::styled(
                    "Loading…",
                    Style::default()
                        .fg(COLOR_LOADING)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
        LoadState::Failed(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("✗ {}", message),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to retry",
                Style::default().fg(COLOR_DIM),
            )),
        ],
    }
}

/// Draw the placeholder for `state` centred in `area`.
pub fn render_status<T>(frame: &mut Frame, area: Rect, state: &LoadState<T>, tick: u64) {
    let paragraph = Paragraph::new(status_lines(state, tick))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
