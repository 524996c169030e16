//! Text formatting for sessions and speakers.

use crate::models::Session;

/// Render a session's time range.
///
/// ISO-like `date T time` values become `"date, HH:MM:SS - HH:MM:SS"`, with
/// any fractional seconds dropped. The date shown is the start date. Anything
/// else is shown as `"start - end"`.
pub fn format_session_time(start: &str, end: &str) -> String {
    match (start.split_once('T'), end.split_once('T')) {
        (Some((date, start_time)), Some((_, end_time))) => format!(
            "{}, {} - {}",
            date,
            strip_fraction(start_time),
            strip_fraction(end_time)
        ),
        _ => format!("{} - {}", start, end),
    }
}

fn strip_fraction(time: &str) -> &str {
    time.split_once('.').map_or(time, |(whole, _)| whole)
}

/// Upper-cased "TYPE · SUBTYPE" badge, skipping empty parts and a literal
/// `"null"` subtype.
pub fn event_label(session: &Session) -> Option<String> {
    let subtype = Some(session.event_subtype.trim()).filter(|s| *s != "null");
    let parts: Vec<String> = [Some(session.event_type.trim()), subtype]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect();

    (!parts.is_empty()).then(|| parts.join(" · "))
}

/// Comma-separated attendance years.
pub fn years_label(years: &[i32]) -> String {
    years
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated speaker names.
pub fn speaker_names(session: &Session) -> String {
    session
        .speakers
        .iter()
        .map(|s| if s.name.is_empty() { s.username.as_str() } else { s.name.as_str() })
        .collect::<Vec<_>>()
        .join(", ")
}
