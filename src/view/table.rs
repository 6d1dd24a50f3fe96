//! Result table for the current page.

use super::helpers::truncate_to_width;
use super::styles::Theme;
use crate::model::Character;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Shown instead of an empty table when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No characters found.";

/// Column headers in display order.
pub const COLUMNS: [&str; 4] = ["Name", "Status", "Gender", "Species"];

const NAME_WIDTH: u16 = 28;

/// Render the visible slice as a table, or the no-results message.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[&Character],
    cursor: usize,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Characters ")
        .border_style(theme.border_for(focused));

    if rows.is_empty() {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(NO_RESULTS_MESSAGE, theme.muted)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let header = Row::new(COLUMNS.map(|c| Cell::from(c).style(theme.section_header)));

    let body = rows.iter().map(|character| {
        Row::new(vec![
            Cell::from(truncate_to_width(character.name(), NAME_WIDTH as usize)),
            Cell::from(character.status().as_str()).style(theme.status(character.status())),
            Cell::from(character.gender().as_str()),
            Cell::from(character.species()),
        ])
    });

    let widths = [
        Constraint::Length(NAME_WIDTH),
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Min(8),
    ];

    let highlight = if focused {
        theme.highlight
    } else {
        Style::default().add_modifier(theme.highlight.add_modifier)
    };

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(cursor.min(rows.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}
