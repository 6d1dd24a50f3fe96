//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are plain methods; side effects the shell must
//! perform are queued as [`Effect`] values.

use crate::model::{Character, Gender, Status};
use crate::query::{
    self, clamp_page, filter_records, FilterOptions, PageSize, QueryResult, QueryState, SortKey,
    SortOrder,
};
use crate::state::search_input_handler::SearchEdit;

// ===== Effect =====

/// Side effect requested by a state transition and applied by the shell
/// after the next frame is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move keyboard focus to the detail panel.
    FocusDetail,
}

// ===== FocusPane =====

/// Which pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Result table (default).
    #[default]
    Table,
    /// Filter checkbox panel.
    Filters,
    /// Name search box; typed characters edit the search text.
    Search,
    /// Detail panel for the selected character.
    Detail,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// Owns the fetched record list (immutable for the session), the
/// [`QueryState`] and all view-model state around it.
///
/// # Invariants
///
/// - After every transition `query().page_index` lies in
///   `[1, max(1, total_pages())]`.
/// - `table_cursor()` indexes into the visible slice, or is 0 when it is empty.
/// - `filter_cursor()` indexes into `filter_options()`, or is 0 when empty.
#[derive(Debug, Clone)]
pub struct AppState {
    characters: Vec<Character>,
    query: QueryState,
    filter_options: FilterOptions,
    matched: usize,
    total_pages: usize,
    selection: Option<Character>,
    effects: Vec<Effect>,
    table_cursor: usize,
    filter_cursor: usize,
    partial: bool,

    /// Which pane has keyboard focus.
    pub focus: FocusPane,

    /// Search box contents; mirrors `query().search_text`.
    pub search_edit: SearchEdit,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create state over the fetched records with an initial query.
    pub fn new(characters: Vec<Character>, query: QueryState) -> Self {
        let filter_options = FilterOptions::from_records(&characters);
        let search_edit = SearchEdit::new(query.search_text.clone());

        let mut state = Self {
            characters,
            query,
            filter_options,
            matched: 0,
            total_pages: 0,
            selection: None,
            effects: Vec::new(),
            table_cursor: 0,
            filter_cursor: 0,
            partial: false,
            focus: FocusPane::default(),
            search_edit,
            help_visible: false,
        };
        state.recompute();
        state
    }

    /// Mark the record list as incomplete because the fetch stopped early.
    pub fn with_partial_fetch(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    // ===== Accessors =====

    /// All fetched records, in fetch order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Current query parameters.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Filter panel options, derived from the full record list.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    /// Selected character shown in the detail panel.
    pub fn selection(&self) -> Option<&Character> {
        self.selection.as_ref()
    }

    /// Records surviving the filters, across all pages.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Page count for the current filters and page size.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Highlighted row within the visible slice.
    pub fn table_cursor(&self) -> usize {
        self.table_cursor
    }

    /// Highlighted option in the filter panel (flat index).
    pub fn filter_cursor(&self) -> usize {
        self.filter_cursor
    }

    /// Whether the fetch stopped before the list was complete.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// Run the pipeline for the current page.
    pub fn result(&self) -> QueryResult<'_> {
        query::run_query(&self.characters, &self.query)
    }

    /// Number of rows on the current page, without materializing them.
    pub fn visible_len(&self) -> usize {
        let size = self.query.page_size.get();
        let offset = (self.query.page_index.max(1) - 1).saturating_mul(size);
        self.matched.saturating_sub(offset).min(size)
    }

    /// Record under the table cursor.
    pub fn highlighted(&self) -> Option<&Character> {
        self.result().visible.get(self.table_cursor).copied()
    }

    // ===== Recompute =====

    /// Refresh cached counts after a query change and restore invariants.
    ///
    /// Clamps the page index and resets the table cursor when it falls
    /// outside the new visible slice.
    pub fn recompute(&mut self) {
        self.matched = filter_records(&self.characters, &self.query).len();
        self.total_pages = query::total_pages(self.matched, self.query.page_size);
        self.query.page_index = clamp_page(self.query.page_index, self.total_pages);

        if self.table_cursor >= self.visible_len() {
            self.table_cursor = 0;
        }
    }

    // ===== Query transitions =====

    /// Replace the search text. Resets to page 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.search_edit = SearchEdit::new(text.clone());
        self.query.set_search_text(text);
        self.recompute();
    }

    /// Apply a text-edit transition to the search box.
    ///
    /// The query only changes (and the page only resets) when the text does.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchEdit) -> SearchEdit) {
        self.search_edit = edit(std::mem::take(&mut self.search_edit));

        if self.search_edit.text != self.query.search_text {
            self.query.set_search_text(self.search_edit.text.clone());
            self.recompute();
        }
    }

    /// Flip a status filter. Resets to page 1.
    pub fn toggle_status(&mut self, status: Status) {
        self.query.toggle_status(status);
        self.recompute();
    }

    /// Flip a gender filter. Resets to page 1.
    pub fn toggle_gender(&mut self, gender: Gender) {
        self.query.toggle_gender(gender);
        self.recompute();
    }

    /// Flip a species filter. Resets to page 1.
    pub fn toggle_species(&mut self, species: &str) {
        self.query.toggle_species(species);
        self.recompute();
    }

    /// Clear search text and every filter. Resets to page 1.
    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
        self.search_edit = SearchEdit::default();
        self.recompute();
    }

    /// Sort by `key`. Resets to page 1.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.query.set_sort_key(key);
        self.table_cursor = 0;
        self.recompute();
    }

    /// Advance to the next sort key.
    pub fn cycle_sort_key(&mut self) {
        self.set_sort_key(self.query.sort_key.next());
    }

    /// Flip the sort direction. Resets to page 1.
    pub fn toggle_sort_order(&mut self) {
        self.query.toggle_sort_order();
        self.table_cursor = 0;
        self.recompute();
    }

    /// Current sort direction.
    pub fn sort_order(&self) -> SortOrder {
        self.query.sort_order
    }

    /// Change the page size. Resets to page 1.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.query.set_page_size(size);
        self.recompute();
    }

    /// Advance to the next page size.
    pub fn cycle_page_size(&mut self) {
        self.set_page_size(self.query.page_size.next());
    }

    // ===== Paging =====

    fn go_to_page(&mut self, page_index: usize) {
        let target = clamp_page(page_index, self.total_pages);
        if target != self.query.page_index {
            self.query.page_index = target;
            self.table_cursor = 0;
        }
    }

    /// Go to the next page; no-op on the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.query.page_index.saturating_add(1));
    }

    /// Go to the previous page; no-op on page 1.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.query.page_index.saturating_sub(1));
    }

    /// Go to page 1.
    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    /// Go to the last page (page 1 when nothing matched).
    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages);
    }

    // ===== Table cursor =====

    /// Move the table highlight down one row, stopping at the last row.
    pub fn cursor_down(&mut self) {
        let last = self.visible_len().saturating_sub(1);
        self.table_cursor = (self.table_cursor + 1).min(last);
    }

    /// Move the table highlight up one row, stopping at the first row.
    pub fn cursor_up(&mut self) {
        self.table_cursor = self.table_cursor.saturating_sub(1);
    }

    // ===== Selection =====

    /// Open the detail panel for the highlighted row.
    ///
    /// Queues [`Effect::FocusDetail`]. No-op when the page is empty.
    pub fn select_current(&mut self) {
        if let Some(character) = self.highlighted().cloned() {
            self.selection = Some(character);
            self.effects.push(Effect::FocusDetail);
        }
    }

    /// Close the detail panel. The query is left untouched.
    pub fn close_detail(&mut self) {
        self.selection = None;
        if self.focus == FocusPane::Detail {
            self.focus = FocusPane::Table;
        }
    }

    /// Drain queued effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Apply one effect to the view-model.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FocusDetail => {
                if self.selection.is_some() {
                    self.focus = FocusPane::Detail;
                }
            }
        }
    }

    // ===== Filter panel =====

    /// Move the filter highlight down, stopping at the last option.
    pub fn filter_cursor_down(&mut self) {
        let last = self.filter_options.len().saturating_sub(1);
        self.filter_cursor = (self.filter_cursor + 1).min(last);
    }

    /// Move the filter highlight up, stopping at the first option.
    pub fn filter_cursor_up(&mut self) {
        self.filter_cursor = self.filter_cursor.saturating_sub(1);
    }

    /// Flip the option under the filter highlight. Resets to page 1.
    pub fn toggle_filter_at_cursor(&mut self) {
        if let Some(option) = self.filter_options.get(self.filter_cursor) {
            option.toggle_in(&mut self.query);
            self.recompute();
        }
    }

    // ===== Focus =====

    /// Cycle focus Table → Filters → Detail (only while open) → Table.
    /// Leaving the search box returns to the table.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Table => FocusPane::Filters,
            FocusPane::Filters if self.selection.is_some() => FocusPane::Detail,
            FocusPane::Filters | FocusPane::Detail | FocusPane::Search => FocusPane::Table,
        };
    }

    /// Focus the search box with the cursor at the end of the text.
    pub fn start_search(&mut self) {
        self.search_edit = SearchEdit::new(self.query.search_text.clone());
        self.focus = FocusPane::Search;
    }

    /// Leave the search box; the text stays applied.
    pub fn leave_search(&mut self) {
        if self.focus == FocusPane::Search {
            self.focus = FocusPane::Table;
        }
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
