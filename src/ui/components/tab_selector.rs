//! Horizontal tab line using a `▶` marker for the active tab.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Build a tab line from `(label, count)` pairs.
///
/// `count` is appended in parentheses when known.
pub fn tab_line(tabs: &[(&str, Option<usize>)], selected: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, count)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ", Style::default().fg(COLOR_DIM)));
        }

        let text = match count {
            Some(n) => format!("{} ({})", label, n),
            None => label.to_string(),
        };

        if i == selected {
            spans.push(Span::styled(
                format!("▶ {}", text),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {}", text),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_selected_tab() {
        let line = tab_line(&[("Sessions", Some(3)), ("Speakers", None)], 1);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("  Sessions (3)"));
        assert!(text.contains("▶ Speakers"));
    }
}
