//! Detail panel for the selected character.

use super::helpers::{empty_line, key_value_line};
use super::styles::Theme;
use crate::model::Character;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shown for empty string fields.
const NONE_TEXT: &str = "-";

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        NONE_TEXT
    } else {
        value
    }
}

/// Lines of the detail panel for `character`.
pub fn detail_lines<'a>(character: &'a Character, theme: &Theme) -> Vec<Line<'a>> {
    let created = character
        .created()
        .map_or_else(|| NONE_TEXT.to_string(), |t| t.format("%Y-%m-%d").to_string());

    vec![
        Line::from(Span::styled(character.name(), theme.header)),
        empty_line(),
        Line::from(vec![
            Span::styled("Status: ", theme.label),
            Span::styled(character.status().as_str(), theme.status(character.status())),
        ]),
        key_value_line("Species", or_dash(character.species()), theme),
        key_value_line("Type", or_dash(character.kind()), theme),
        key_value_line("Gender", character.gender().as_str(), theme),
        key_value_line("Origin", or_dash(&character.origin().name), theme),
        key_value_line("Location", or_dash(&character.location().name), theme),
        key_value_line("Episodes", character.episode_count().to_string(), theme),
        key_value_line("Created", created, theme),
        empty_line(),
        key_value_line("Image", or_dash(character.image()), theme),
        empty_line(),
        Line::from(Span::styled("Esc to close", theme.muted)),
    ]
}

/// Render the detail panel.
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    character: &Character,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Selected Character ")
        .border_style(theme.border_for(focused));

    let paragraph = Paragraph::new(detail_lines(character, theme))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
