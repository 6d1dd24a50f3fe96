//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move the highlight up one row in the focused list. Default: k/↑
    MoveUp,
    /// Move the highlight down one row in the focused list. Default: j/↓
    MoveDown,

    // Paging
    /// Go to the next page of results. Default: n/→/Page Down
    NextPage,
    /// Go to the previous page of results. Default: p/←/Page Up
    PrevPage,
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Cycle page size 10 → 20 → 50. Default: z
    CyclePageSize,

    // Sorting
    /// Cycle sort key name → status → gender. Default: s
    CycleSortKey,
    /// Flip ascending/descending. Default: o
    ToggleSortOrder,

    // Filtering
    /// Start editing the name search box. Default: /
    StartSearch,
    /// Toggle the filter option under the filter-panel cursor. Default: Space
    ToggleFilter,
    /// Clear search text and every filter set. Default: c
    ClearFilters,

    // Focus and selection
    /// Cycle focus Table → Filters → Detail (when open). Default: Tab
    CycleFocus,
    /// Open the detail panel for the highlighted row, or toggle the
    /// highlighted filter when the filter panel has focus. Default: Enter
    Select,
    /// Close the detail panel or leave the search box. Default: Esc
    Close,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
