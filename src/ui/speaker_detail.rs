//! Speaker detail screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::components::render_status;
use super::format::{format_session_time, years_label};
use super::helpers::{truncate, SELECTED_MARKER};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LINK, COLOR_MUTED,
};
use crate::models::{Session, Speaker, SpeakerField};
use crate::view_state::{LoadState, SpeakerDetailView};

pub fn render_speaker_detail(frame: &mut Frame, area: Rect, view: &SpeakerDetailView, tick: u64) {
    let LoadState::Loaded(profile) = view.state() else {
        render_status(frame, area, view.state(), tick);
        return;
    };

    let [info_area, sessions_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    frame.render_widget(
        Paragraph::new(profile_lines(&profile.speaker)).wrap(Wrap { trim: false }),
        info_area,
    );
    render_sessions(frame, sessions_area, &profile.sessions, view.selection().index());
}

fn labelled(label: &str, value: &str, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value.to_string(), value_style),
    ])
}

fn profile_lines(speaker: &Speaker) -> Vec<Line<'static>> {
    let name = if speaker.name.is_empty() {
        speaker.username.clone()
    } else {
        speaker.name.clone()
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  @{}", speaker.username),
            Style::default().fg(COLOR_DIM),
        ),
    ])];

    if let Some(headline) = speaker.headline() {
        lines.push(Line::from(Span::styled(
            headline,
            Style::default().fg(COLOR_MUTED),
        )));
    }
    if let Some(location) = speaker.known(SpeakerField::Location) {
        lines.push(labelled("Location", location, Style::default().fg(COLOR_MUTED)));
    }
    if let Some(url) = speaker.known(SpeakerField::Url) {
        lines.push(labelled(
            "Website",
            url,
            Style::default()
                .fg(COLOR_LINK)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    if !speaker.years.is_empty() {
        lines.push(labelled(
            "Years",
            &years_label(&speaker.years),
            Style::default().fg(COLOR_MUTED),
        ));
    }
    if let Some(about) = speaker.known(SpeakerField::About) {
        lines.push(Line::from(""));
        for paragraph in about.lines() {
            lines.push(Line::from(paragraph.to_string()));
        }
    }
    lines
}

fn render_sessions(frame: &mut Frame, area: Rect, sessions: &[Session], selected: usize) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" Sessions ({}) ", sessions.len()),
            Style::default().fg(COLOR_DIM),
        ));

    if sessions.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No sessions", Style::default().fg(COLOR_DIM)))
                .block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = sessions
        .iter()
        .enumerate()
        .map(|(i, session)| {
            let is_selected = i == selected;
            let style = if is_selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_MUTED)
            };
            let marker = if is_selected { SELECTED_MARKER } else { "  " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(truncate(&session.title, width), style),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format_session_time(&session.start, &session.end),
                        Style::default().fg(COLOR_DIM),
                    ),
                ]),
            ])
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
