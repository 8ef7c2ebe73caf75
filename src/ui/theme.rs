//! Color theme constants.

use ratatui::style::Color;

/// Teal accent used for headings, the active pill and the search spinner
pub const COLOR_ACCENT: Color = Color::Rgb(97, 182, 176); // #61b6b0

pub const COLOR_HEADER: Color = Color::White;

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Dim text for secondary info (English names, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Translations and narrators
pub const COLOR_SECONDARY: Color = Color::Gray;

/// Emphasized runs in the explanation
pub const COLOR_EMPHASIS: Color = Color::Yellow;

/// Cursor row background in lists
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 60, 58);

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_ONLINE: Color = Color::LightGreen;
