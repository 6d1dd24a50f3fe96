//! Search input widget for rendering the name search box.

use super::styles::Theme;
use crate::state::SearchEdit;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown when the box is empty and not being edited.
pub const SEARCH_PLACEHOLDER: &str = "Filter by name (/)";

/// Search input widget.
///
/// Shows a block cursor while focused; otherwise the current text or a
/// placeholder.
pub struct SearchInput<'a> {
    edit: &'a SearchEdit,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(edit: &'a SearchEdit, focused: bool, theme: &'a Theme) -> Self {
        Self {
            edit,
            focused,
            theme,
        }
    }

    fn content(&self) -> Line<'a> {
        let text = &self.edit.text;

        if !self.focused {
            return if text.is_empty() {
                Line::from(Span::styled(SEARCH_PLACEHOLDER, self.theme.muted))
            } else {
                Line::from(text.as_str())
            };
        }

        // Split text into before/at/after cursor for rendering the cursor
        let before: String = text.chars().take(self.edit.cursor).collect();
        let mut rest = text.chars().skip(self.edit.cursor);
        let at_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(at_cursor, self.theme.highlight.add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(self.theme.border_for(self.focused));

        Paragraph::new(self.content()).block(block).render(area, buf);
    }
}
