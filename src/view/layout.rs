//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into header, controls bar, body
//! (filters, table, optional detail panel), pager and status bar, and hands
//! each area to its widget.

use super::constants::{
    CONTROLS_HEIGHT, DETAIL_PANEL_WIDTH_PERCENT, FILTER_PANEL_WIDTH, HEADER_HEIGHT,
    PAGER_HEIGHT, PAGE_SIZE_CONTROL_WIDTH, SORT_CONTROL_WIDTH, STATUS_BAR_HEIGHT,
};
use super::detail::render_detail;
use super::filters::render_filters;
use super::helpers::key_hint;
use super::search_input::SearchInput;
use super::styles::Theme;
use super::table::render_table;
use crate::query::QueryState;
use crate::source::FetchProgress;
use crate::state::{AppState, FocusPane};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title shown in the header bar.
pub const APP_TITLE: &str = "rmdex · Rick and Morty characters";

/// Note appended to the status bar when the fetch stopped early.
pub const PARTIAL_NOTICE: &str = "list may be incomplete, see log";

/// Named areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar.
    pub header: Rect,
    /// Search box, sort and page size controls.
    pub controls: Rect,
    /// Filter checkbox panel.
    pub filters: Rect,
    /// Result table.
    pub table: Rect,
    /// Detail panel, present only while a character is selected.
    pub detail: Option<Rect>,
    /// Page indicator.
    pub pager: Rect,
    /// Counts and key hints.
    pub status: Rect,
}

/// Split `area` into the main screen regions.
pub fn compute_areas(area: Rect, detail_open: bool) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(0)])
        .split(rows[2]);

    let (table, detail) = if detail_open {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - DETAIL_PANEL_WIDTH_PERCENT),
                Constraint::Percentage(DETAIL_PANEL_WIDTH_PERCENT),
            ])
            .split(body[1]);
        (split[0], Some(split[1]))
    } else {
        (body[1], None)
    };

    ScreenAreas {
        header: rows[0],
        controls: rows[1],
        filters: body[0],
        table,
        detail,
        pager: rows[3],
        status: rows[4],
    }
}

/// Render the whole main screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let areas = compute_areas(frame.area(), state.selection().is_some());

    render_header(frame, areas.header, state, theme);
    render_controls(frame, areas.controls, state, theme);

    render_filters(
        frame,
        areas.filters,
        state.filter_options(),
        state.query(),
        state.filter_cursor(),
        state.focus == FocusPane::Filters,
        theme,
    );

    let result = state.result();
    render_table(
        frame,
        areas.table,
        &result.visible,
        state.table_cursor(),
        state.focus == FocusPane::Table,
        theme,
    );

    if let (Some(area), Some(character)) = (areas.detail, state.selection()) {
        render_detail(
            frame,
            area,
            character,
            state.focus == FocusPane::Detail,
            theme,
        );
    }

    render_pager(frame, areas.pager, state.query(), state.total_pages(), theme);
    render_status_bar(frame, areas.status, state, theme);
}

/// Render the header bar with the title and record count.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(APP_TITLE, theme.header),
        Span::styled(
            format!("  ({} loaded)", state.characters().len()),
            theme.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the controls bar: search box, sort control and page size control.
fn render_controls(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(SORT_CONTROL_WIDTH),
            Constraint::Length(PAGE_SIZE_CONTROL_WIDTH),
        ])
        .split(area);

    frame.render_widget(
        SearchInput::new(
            &state.search_edit,
            state.focus == FocusPane::Search,
            theme,
        ),
        chunks[0],
    );

    let query = state.query();
    let sort = Paragraph::new(Line::from(sort_label(query))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sort (s/o) ")
            .border_style(theme.border),
    );
    frame.render_widget(sort, chunks[1]);

    let size = Paragraph::new(Line::from(query.page_size.get().to_string())).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Per page (z) ")
            .border_style(theme.border),
    );
    frame.render_widget(size, chunks[2]);
}

/// `"Name A-Z"` style label for the sort control.
pub fn sort_label(query: &QueryState) -> String {
    format!("{} {}", query.sort_key.label(), query.sort_order.label())
}

/// `"Page X / Y"` label. Y is the raw page count and may be 0.
pub fn pager_label(page_index: usize, total_pages: usize) -> String {
    format!("Page {page_index} / {total_pages}")
}

/// Render the pager line with prev/next hints, dimming unavailable moves.
fn render_pager(
    frame: &mut Frame,
    area: Rect,
    query: &QueryState,
    total_pages: usize,
    theme: &Theme,
) {
    let has_prev = query.page_index > 1;
    let has_next = query.page_index < total_pages;

    let prev_style = if has_prev { theme.key } else { theme.muted };
    let next_style = if has_next { theme.key } else { theme.muted };

    let line = Line::from(vec![
        Span::styled("◀ p Prev", prev_style),
        Span::raw("   "),
        Span::raw(pager_label(query.page_index, total_pages)),
        Span::raw("   "),
        Span::styled("Next n ▶", next_style),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Hints relevant to the focused pane.
fn focus_hints(focus: FocusPane, theme: &Theme) -> Vec<Span<'static>> {
    let pairs: &[(&'static str, &'static str)] = match focus {
        FocusPane::Table => &[("Enter", "details"), ("/", "search"), ("Tab", "filters")],
        FocusPane::Filters => &[("Space", "toggle"), ("c", "clear"), ("Tab", "next")],
        FocusPane::Search => &[("Enter/Esc", "done"), ("Backspace", "delete")],
        FocusPane::Detail => &[("Esc", "close"), ("Tab", "table")],
    };

    let mut spans = Vec::new();
    for &(key, description) in pairs {
        spans.extend(key_hint(key, description, theme));
        spans.push(Span::raw("  "));
    }
    spans.extend(key_hint("?", "help", theme));
    spans.push(Span::raw("  "));
    spans.extend(key_hint("q", "quit", theme));
    spans
}

/// Render the status bar with counts, partial-fetch notice and key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = vec![Span::raw(format!(
        "{} of {} characters",
        state.matched(),
        state.characters().len()
    ))];

    if state.is_partial() {
        spans.push(Span::raw(" · "));
        spans.push(Span::styled(PARTIAL_NOTICE, theme.warning));
    }

    spans.push(Span::raw(" │ "));
    spans.extend(focus_hints(state.focus, theme));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the loading screen shown while pages are being fetched.
pub fn render_loading(frame: &mut Frame, progress: Option<FetchProgress>, theme: &Theme) {
    let fetched = progress.map_or(0, |p| p.records_fetched);

    let area = frame.area();
    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area)[1];

    let lines = vec![
        Line::from(Span::styled(APP_TITLE, theme.header)),
        Line::from(loading_label(fetched)),
        Line::from(Span::styled("Ctrl+C to abort", theme.muted)),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        middle,
    );
}

/// `"Loading characters... N fetched"`.
pub fn loading_label(fetched: usize) -> String {
    format!("Loading characters... {fetched} fetched")
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
