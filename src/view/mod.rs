//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod filters;
mod help;
mod helpers;
pub mod layout;
mod search_input;
pub mod styles;
mod table;

pub use detail::detail_lines;
pub use help::render_help_overlay;
pub use helpers::{empty_line, key_value_line, truncate_to_width};
pub use layout::{compute_areas, render_layout, render_loading, ScreenAreas};
pub use search_input::{SearchInput, SEARCH_PLACEHOLDER};
pub use styles::{ColorConfig, Theme};
pub use table::NO_RESULTS_MESSAGE;

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::query::QueryState;
use crate::source::{fetch_characters, FetchOutcome, PageSource};
use crate::state::{search_input_handler as edit, AppState, FocusPane};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    theme: Theme,
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an initialized terminal and state.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        theme: Theme,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            theme,
        }
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events and redraws after each one.
    /// Returns when user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                // Release/repeat events would double every keystroke on some platforms
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }

            self.draw()?;
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing a search
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay captures all keys
        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        // Search box editing happens before key binding dispatch
        if self.app_state.focus == FocusPane::Search && self.handle_search_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        debug!(?action, focus = ?self.app_state.focus, "Key action");
        self.apply_action(action)
    }

    /// Handle text editing keys while the search box is focused.
    ///
    /// Returns true if the key was consumed.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let state = &mut self.app_state;
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(ch) if plain => state.edit_search(|e| edit::handle_char_input(e, ch)),
            KeyCode::Backspace => state.edit_search(edit::handle_backspace),
            KeyCode::Delete => state.edit_search(edit::handle_delete),
            KeyCode::Left => state.edit_search(edit::handle_cursor_left),
            KeyCode::Right => state.edit_search(edit::handle_cursor_right),
            KeyCode::Home => state.edit_search(edit::handle_home),
            KeyCode::End => state.edit_search(edit::handle_end),
            KeyCode::Enter | KeyCode::Esc => state.leave_search(),
            // Tab, arrows up/down and the rest go through key bindings
            _ => return false,
        }
        true
    }

    /// Route an action to the state transition for the focused pane.
    ///
    /// Returns true if app should quit
    fn apply_action(&mut self, action: KeyAction) -> bool {
        let state = &mut self.app_state;

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => state.toggle_help(),
            KeyAction::CycleFocus => state.cycle_focus(),
            KeyAction::StartSearch => state.start_search(),

            KeyAction::MoveUp => match state.focus {
                FocusPane::Filters => state.filter_cursor_up(),
                FocusPane::Table => state.cursor_up(),
                FocusPane::Search | FocusPane::Detail => {}
            },
            KeyAction::MoveDown => match state.focus {
                FocusPane::Filters => state.filter_cursor_down(),
                FocusPane::Table => state.cursor_down(),
                FocusPane::Search | FocusPane::Detail => {}
            },

            KeyAction::Select => match state.focus {
                FocusPane::Table => state.select_current(),
                FocusPane::Filters => state.toggle_filter_at_cursor(),
                FocusPane::Search | FocusPane::Detail => {}
            },
            KeyAction::ToggleFilter => {
                if state.focus == FocusPane::Filters {
                    state.toggle_filter_at_cursor();
                }
            }
            KeyAction::ClearFilters => state.clear_filters(),
            KeyAction::Close => {
                if state.selection().is_some() {
                    state.close_detail();
                }
            }

            KeyAction::NextPage => state.next_page(),
            KeyAction::PrevPage => state.prev_page(),
            KeyAction::FirstPage => state.first_page(),
            KeyAction::LastPage => state.last_page(),
            KeyAction::CyclePageSize => state.cycle_page_size(),
            KeyAction::CycleSortKey => state.cycle_sort_key(),
            KeyAction::ToggleSortOrder => state.toggle_sort_order(),
        }

        false
    }

    /// Render the current frame, then apply queued effects.
    ///
    /// Effects change what the next frame shows (focus moves to the detail
    /// panel), so the frame is drawn again when any were applied.
    fn draw(&mut self) -> Result<(), TuiError> {
        self.render_frame()?;

        let effects = self.app_state.take_effects();
        if !effects.is_empty() {
            for effect in effects {
                debug!(?effect, "Applying effect");
                self.app_state.apply_effect(effect);
            }
            self.render_frame()?;
        }

        Ok(())
    }

    fn render_frame(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let theme = &self.theme;

        self.terminal.draw(|frame| {
            render_layout(frame, state, theme);
            if state.help_visible {
                render_help_overlay(frame, theme);
            }
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a frame the way the event loop does (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Startup =====

/// Settings carried from the resolved configuration into the TUI.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// First page URL of the character collection.
    pub endpoint: String,
    /// Initial query (search text, sort, page size).
    pub query: QueryState,
    /// Whether colors are used.
    pub color: ColorConfig,
}

impl CliArgs {
    /// Create new CliArgs
    pub fn new(endpoint: String, query: QueryState, color: ColorConfig) -> Self {
        Self {
            endpoint,
            query,
            color,
        }
    }
}

/// Fetch the character list, redrawing the loading screen after every page.
///
/// Fetch failures are not errors here: they come back inside the outcome
/// with whatever was collected. Only a failing terminal aborts.
pub fn load_characters<B, S>(
    terminal: &mut Terminal<B>,
    source: &mut S,
    endpoint: &str,
    theme: &Theme,
) -> Result<FetchOutcome, TuiError>
where
    B: ratatui::backend::Backend,
    S: PageSource + ?Sized,
{
    terminal.draw(|frame| render_loading(frame, None, theme))?;

    let mut draw_error = None;
    let outcome = fetch_characters(source, endpoint, |progress| {
        if draw_error.is_some() {
            return;
        }
        if let Err(err) = terminal.draw(|frame| render_loading(frame, Some(progress), theme)) {
            draw_error = Some(err);
        }
    });

    if let Some(err) = draw_error {
        return Err(err.into());
    }

    if let Some(err) = &outcome.error {
        warn!(
            records = outcome.characters.len(),
            error = %err,
            "Browsing a partial character list"
        );
    }

    Ok(outcome)
}

/// Initialize and run the TUI application against a page source
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, the loading screen, the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source<S>(source: &mut S, args: CliArgs) -> Result<(), TuiError>
where
    S: PageSource + ?Sized,
{
    let terminal = setup_terminal()?;

    let result = browse(terminal, source, args);

    // Always restore terminal state
    restore_terminal()?;

    result
}

fn browse<S>(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    source: &mut S,
    args: CliArgs,
) -> Result<(), TuiError>
where
    S: PageSource + ?Sized,
{
    let theme = Theme::new(args.color);
    let outcome = load_characters(&mut terminal, source, &args.endpoint, &theme)?;

    info!(
        records = outcome.characters.len(),
        pages = outcome.pages_fetched,
        partial = outcome.is_partial(),
        "Starting browser"
    );

    let partial = outcome.is_partial();
    let app_state = AppState::new(outcome.characters, args.query).with_partial_fetch(partial);

    let mut app = TuiApp::with_terminal(terminal, app_state, KeyBindings::default(), theme);
    app.run()
}

/// Enter raw mode and the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
