//! Color theme constants.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selection marker
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Secondary text such as times and venues
pub const COLOR_MUTED: Color = Color::Gray;

/// Event type badges
pub const COLOR_BADGE: Color = Color::Rgb(229, 53, 171); // GraphQL pink #E535AB

/// Links
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204);

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Yellow;

/// Error state
pub const COLOR_ERROR: Color = Color::Red;
