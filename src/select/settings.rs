//! Centralized, hardcoded UI settings for the selection prompts.
//!
//! This is the single place to tweak prompt strings, glyphs, colors, and
//! indentation. The engine itself never picks a color; everything it prints
//! resolves through here plus the caller's `color` switch.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

/// Fallback width when the terminal size probe fails.
pub const FALLBACK_COLUMNS: usize = 80;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_BULLET: &str = "•";
pub const QUERY_PROMPT: &str = "search: ";
pub const COMMIT_GLYPH_COLOR: &str = "✔";
pub const COMMIT_GLYPH_PLAIN: &str = "v";
pub const COMMIT_SEPARATOR: &str = ", ";
pub const COMMIT_EMPTY: &str = "None selected";

pub const HELP_SINGLE: &str = "↑/↓ move, Enter confirm";
pub const HELP_MULTI: &str = "↑/↓ move, Space toggle, Enter confirm";
pub const HELP_SEARCH: &str = "↑/↓ move, Enter confirm, r new search, q quit";

pub const NO_RESULTS_HINT: &str = "(press any key to search again)";
pub const FETCH_FAILED_LABEL: &str = "search failed:";
pub const NO_RESULTS_LABEL: &str = "no matches for";

// ---------------------------------------------------------------------------
// Option rows
// ---------------------------------------------------------------------------

pub const ROW_MARKER_ACTIVE_COLOR: &str = "▶";
pub const ROW_MARKER_INACTIVE_COLOR: &str = "·";
pub const ROW_MARKER_ACTIVE_PLAIN: &str = ">";
pub const ROW_MARKER_INACTIVE_PLAIN: &str = "-";

pub const CHECKBOX_ON: &str = "[x]";
pub const CHECKBOX_OFF: &str = "[ ]";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PROMPT_BULLET: Color = Color::DarkGrey;
pub const COLOR_PROMPT_TITLE: Color = Color::Cyan;
pub const COLOR_HELP: Color = Color::DarkGrey;
pub const COLOR_ROW_ACTIVE: Color = Color::Yellow;
pub const COLOR_ROW_MARKER_ACTIVE: Color = Color::DarkYellow;
pub const COLOR_ROW_MARKER_INACTIVE: Color = Color::DarkGrey;
pub const COLOR_ROW_CHECKED: Color = Color::Green;
pub const COLOR_ERROR_LINE: Color = Color::Red;
pub const COLOR_COMMIT_GLYPH: Color = Color::Green;
pub const COLOR_COMMIT_ANSWER: Color = Color::Cyan;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

/// Marker glyph for an option row, keyed on highlight and color mode.
pub fn row_marker(is_active: bool, color: bool) -> &'static str {
    match (is_active, color) {
        (true, true) => ROW_MARKER_ACTIVE_COLOR,
        (false, true) => ROW_MARKER_INACTIVE_COLOR,
        (true, false) => ROW_MARKER_ACTIVE_PLAIN,
        (false, false) => ROW_MARKER_INACTIVE_PLAIN,
    }
}

/// Checkbox glyph for a multi-select row.
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        CHECKBOX_ON
    } else {
        CHECKBOX_OFF
    }
}

/// Commit glyph keyed on color mode.
pub fn commit_glyph(color: bool) -> &'static str {
    if color {
        COMMIT_GLYPH_COLOR
    } else {
        COMMIT_GLYPH_PLAIN
    }
}
