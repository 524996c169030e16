//! Session detail screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::components::render_status;
use super::format::{event_label, format_session_time};
use super::helpers::{truncate, SELECTED_MARKER};
use super::theme::{COLOR_ACCENT, COLOR_BADGE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};
use crate::models::{Session, SpeakerField};
use crate::view_state::{LoadState, SessionDetailView};

/// Rows per speaker entry in the speakers panel
const SPEAKER_ROWS: u16 = 3;

pub fn render_session_detail(frame: &mut Frame, area: Rect, view: &SessionDetailView, tick: u64) {
    let LoadState::Loaded(session) = view.state() else {
        render_status(frame, area, view.state(), tick);
        return;
    };

    let speakers_height = if session.speakers.is_empty() {
        0
    } else {
        (session.speakers.len() as u16 * SPEAKER_ROWS + 1).min(area.height / 2)
    };
    let [info_area, speakers_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(speakers_height),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(info_lines(session)).wrap(Wrap { trim: false }),
        info_area,
    );

    if speakers_height > 0 {
        render_speakers(frame, speakers_area, session, view.selection().index());
    }
}

fn info_lines(session: &Session) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            session.title.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_session_time(&session.start, &session.end),
            Style::default().fg(COLOR_MUTED),
        )),
    ];

    if let Some(label) = event_label(session) {
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(COLOR_BADGE),
        )));
    }
    if let Some(venue) = session.venue() {
        lines.push(Line::from(Span::styled(
            format!("Venue: {}", venue),
            Style::default().fg(COLOR_MUTED),
        )));
    }

    if !session.description.trim().is_empty() {
        lines.push(Line::from(""));
        for paragraph in session.description.lines() {
            lines.push(Line::from(paragraph.to_string()));
        }
    }
    lines
}

fn render_speakers(frame: &mut Frame, area: Rect, session: &Session, selected: usize) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Speakers ", Style::default().fg(COLOR_DIM)));
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = session
        .speakers
        .iter()
        .enumerate()
        .map(|(i, speaker)| {
            let is_selected = i == selected;
            let style = if is_selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_MUTED)
            };
            let marker = if is_selected { SELECTED_MARKER } else { "  " };
            let name = if speaker.name.is_empty() {
                &speaker.username
            } else {
                &speaker.name
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(marker, style),
                Span::styled(truncate(name, width), style),
            ])];
            let sub: Vec<String> = [
                speaker.headline(),
                speaker.known(SpeakerField::Location).map(str::to_string),
            ]
            .into_iter()
            .flatten()
            .collect();
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(truncate(&sub.join(" · "), width), Style::default().fg(COLOR_DIM)),
            ]));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
