//! Filter checkbox panel: status, gender and species groups.

use super::helpers::truncate_to_width;
use super::styles::Theme;
use crate::query::{FilterOption, FilterOptions, QueryState};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Group headings in panel order.
const GROUPS: [&str; 3] = ["Status", "Gender", "Species"];

/// Line index of the option at `flat_index`, counting group headings.
fn line_of(options: &FilterOptions, flat_index: usize) -> usize {
    let genders_start = options.statuses.len();
    let species_start = genders_start + options.genders.len();

    let headings_before = if flat_index < genders_start {
        1
    } else if flat_index < species_start {
        2
    } else {
        3
    };
    flat_index + headings_before
}

/// First line to show so that `target` stays inside a viewport of `height`.
fn scroll_offset(target: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    target.saturating_sub(height - 1)
}

fn checkbox(option: FilterOption<'_>, query: &QueryState) -> &'static str {
    if option.is_selected(query) {
        "[x] "
    } else {
        "[ ] "
    }
}

/// Build every panel line (headings plus checkboxes).
fn build_lines<'a>(
    options: &'a FilterOptions,
    query: &QueryState,
    cursor: Option<usize>,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let group_starts = [
        0,
        options.statuses.len(),
        options.statuses.len() + options.genders.len(),
    ];

    let mut lines = Vec::with_capacity(options.len() + GROUPS.len());
    for index in 0..options.len() {
        if let Some(group) = group_starts.iter().position(|&start| start == index) {
            lines.push(Line::from(Span::styled(GROUPS[group], theme.section_header)));
        }
        let Some(option) = options.get(index) else {
            continue;
        };

        let label = truncate_to_width(option.label(), width.saturating_sub(4));
        let text = format!("{}{}", checkbox(option, query), label);
        let style = if cursor == Some(index) {
            theme.highlight
        } else {
            ratatui::style::Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    // Species heading even when no species were fetched
    if options.species.is_empty() {
        lines.push(Line::from(Span::styled(GROUPS[2], theme.section_header)));
    }

    lines
}

/// Render the filter panel. The cursor is only highlighted while focused.
pub fn render_filters(
    frame: &mut Frame,
    area: Rect,
    options: &FilterOptions,
    query: &QueryState,
    cursor: usize,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .border_style(theme.border_for(focused));

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let highlighted = focused.then_some(cursor);

    let lines = build_lines(options, query, highlighted, inner_width, theme);
    let offset = if focused {
        scroll_offset(line_of(options, cursor), inner_height)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}
