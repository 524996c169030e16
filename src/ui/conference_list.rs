//! The conference list: sessions and speakers under two tabs.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::components::{render_status, tab_line};
use super::format::{event_label, format_session_time, speaker_names};
use super::helpers::{truncate, SELECTED_MARKER};
use super::theme::{COLOR_ACCENT, COLOR_BADGE, COLOR_DIM, COLOR_MUTED};
use crate::models::{Session, Speaker, SpeakerField};
use crate::view_state::{ConferenceListView, ListTab, LoadState};

pub fn render_conference_list(frame: &mut Frame, area: Rect, view: &ConferenceListView, tick: u64) {
    let [tabs_area, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let data = view.state().data();
    let selected_tab = match view.tab() {
        ListTab::Sessions => 0,
        ListTab::Speakers => 1,
    };
    let tabs = tab_line(
        &[
            (ListTab::Sessions.title(), data.map(|d| d.sessions.len())),
            (ListTab::Speakers.title(), data.map(|d| d.speakers.len())),
        ],
        selected_tab,
    );
    frame.render_widget(Paragraph::new(tabs), tabs_area);

    let LoadState::Loaded(data) = view.state() else {
        render_status(frame, body, view.state(), tick);
        return;
    };

    let width = body.width.saturating_sub(2) as usize;
    let selected = view.selection().index();
    let items: Vec<ListItem> = match view.tab() {
        ListTab::Sessions => data
            .sessions
            .iter()
            .enumerate()
            .map(|(i, s)| session_item(s, i == selected, width))
            .collect(),
        ListTab::Speakers => data
            .speakers
            .iter()
            .enumerate()
            .map(|(i, s)| speaker_item(s, i == selected, width))
            .collect(),
    };

    if items.is_empty() {
        let empty = match view.tab() {
            ListTab::Sessions => "No sessions",
            ListTab::Speakers => "No speakers",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(COLOR_DIM))),
            body,
        );
        return;
    }

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(List::new(items), body, &mut state);
}

fn title_line(title: &str, selected: bool, width: usize) -> Line<'static> {
    let (marker, style) = if selected {
        (
            SELECTED_MARKER,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(COLOR_MUTED))
    };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(truncate(title, width.saturating_sub(2)), style),
    ])
}

fn detail_line(text: String, style: Style, width: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(truncate(&text, width.saturating_sub(2)), style),
    ])
}

fn session_item(session: &Session, selected: bool, width: usize) -> ListItem<'static> {
    let mut lines = vec![title_line(&session.title, selected, width)];

    let description = session.description.split_whitespace().collect::<Vec<_>>().join(" ");
    if !description.is_empty() {
        lines.push(detail_line(description, Style::default().fg(COLOR_DIM), width));
    }

    lines.push(detail_line(
        format_session_time(&session.start, &session.end),
        Style::default().fg(COLOR_MUTED),
        width,
    ));

    let mut meta = Vec::new();
    if let Some(label) = event_label(session) {
        meta.push(label);
    }
    if let Some(venue) = session.venue() {
        meta.push(format!("Venue: {}", venue));
    }
    if !meta.is_empty() {
        lines.push(detail_line(
            meta.join("  "),
            Style::default().fg(COLOR_BADGE),
            width,
        ));
    }

    if !session.speakers.is_empty() {
        lines.push(detail_line(
            speaker_names(session),
            Style::default().fg(COLOR_DIM),
            width,
        ));
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn speaker_item(speaker: &Speaker, selected: bool, width: usize) -> ListItem<'static> {
    let name = if speaker.name.is_empty() {
        &speaker.username
    } else {
        &speaker.name
    };
    let mut lines = vec![title_line(name, selected, width)];

    if let Some(headline) = speaker.headline() {
        lines.push(detail_line(headline, Style::default().fg(COLOR_MUTED), width));
    }
    if let Some(location) = speaker.known(SpeakerField::Location) {
        lines.push(detail_line(
            location.to_string(),
            Style::default().fg(COLOR_DIM),
            width,
        ));
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}
