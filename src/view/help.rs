//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Shortcut table: category, then (keys, description) pairs.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/k ↓/↑", "Move highlight (table or filters)"),
            ("Tab", "Cycle focus: table, filters, details"),
        ],
    ),
    (
        "Paging",
        &[
            ("n/→/PgDn", "Next page"),
            ("p/←/PgUp", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("z", "Page size 10 / 20 / 50"),
        ],
    ),
    (
        "Sorting",
        &[("s", "Sort by name / status / gender"), ("o", "Toggle A-Z / Z-A")],
    ),
    (
        "Filtering",
        &[
            ("/", "Search by name (Enter/Esc to leave)"),
            ("Space", "Toggle highlighted filter"),
            ("c", "Clear search and filters"),
        ],
    ),
    (
        "Details",
        &[("Enter", "Show selected character"), ("Esc", "Close details")],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Width of the key column.
const KEY_COLUMN: usize = 12;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.focused_border),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        theme.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    HELP_SECTIONS
        .iter()
        .flat_map(|(category, entries)| {
            std::iter::once(Line::from(Span::styled(*category, theme.section_header))).chain(
                entries.iter().map(move |(keys, description)| {
                    Line::from(vec![
                        Span::styled(format!("  {keys:<KEY_COLUMN$}"), theme.key),
                        Span::raw(*description),
                    ])
                }),
            )
        })
        .collect()
}

// ===== Tests =====
