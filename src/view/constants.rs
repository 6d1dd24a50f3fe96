//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the controls bar (search box, sort, page size) in lines.
///
/// Includes the border around each control.
pub const CONTROLS_HEIGHT: u16 = 3;

/// Height of the pager line.
pub const PAGER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the filter panel in columns.
pub const FILTER_PANEL_WIDTH: u16 = 26;

/// Width of the sort control in the controls bar.
pub const SORT_CONTROL_WIDTH: u16 = 20;

/// Width of the page size control in the controls bar.
pub const PAGE_SIZE_CONTROL_WIDTH: u16 = 16;

/// Width percentage of the results area given to the detail panel.
pub const DETAIL_PANEL_WIDTH_PERCENT: u16 = 45;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 90;
