//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::{Character, Gender, Location, Status};
use crate::query::QueryState;
use crate::state::AppState;
use crate::view::{ColorConfig, Theme, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Twelve characters covering every status and gender and four species.
///
/// Name order A-Z: Abradolf Lincler, Beth Smith, Birdperson, Gearhead,
/// Jerry Smith, Morty Smith, Mr. Poopybutthole, Rick Sanchez, Squanchy,
/// Summer Smith, Tammy Guetermann, Unity.
pub fn sample_characters() -> Vec<Character> {
    let earth = Location {
        name: "Earth (C-137)".to_string(),
        url: "https://rickandmortyapi.com/api/location/1".to_string(),
    };

    vec![
        Character::new(1, "Rick Sanchez", Status::Alive, "Human", Gender::Male, "https://img/1.jpeg")
            .with_places(earth.clone(), earth.clone())
            .with_episodes(vec!["e1".into(), "e2".into(), "e3".into()]),
        Character::new(2, "Morty Smith", Status::Alive, "Human", Gender::Male, "https://img/2.jpeg"),
        Character::new(3, "Summer Smith", Status::Alive, "Human", Gender::Female, "https://img/3.jpeg"),
        Character::new(4, "Beth Smith", Status::Alive, "Human", Gender::Female, "https://img/4.jpeg"),
        Character::new(5, "Jerry Smith", Status::Alive, "Human", Gender::Male, "https://img/5.jpeg"),
        Character::new(6, "Abradolf Lincler", Status::Unknown, "Human", Gender::Male, "https://img/6.jpeg")
            .with_kind("Genetic experiment"),
        Character::new(7, "Birdperson", Status::Dead, "Alien", Gender::Male, "https://img/7.jpeg"),
        Character::new(8, "Unity", Status::Alive, "Alien", Gender::Genderless, "https://img/8.jpeg"),
        Character::new(9, "Mr. Poopybutthole", Status::Alive, "Poopybutthole", Gender::Male, "https://img/9.jpeg"),
        Character::new(10, "Squanchy", Status::Unknown, "Cat-Person", Gender::Unknown, "https://img/10.jpeg"),
        Character::new(11, "Tammy Guetermann", Status::Dead, "Human", Gender::Female, "https://img/11.jpeg"),
        Character::new(12, "Gearhead", Status::Alive, "Alien", Gender::Male, "https://img/12.jpeg"),
    ]
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Build a harness over `characters` with the default query and an 100x30 terminal.
    pub fn from_characters(characters: Vec<Character>) -> Result<Self, TuiError> {
        Self::with_query(characters, QueryState::default(), 100, 30)
    }

    /// Build a harness with an initial query and custom terminal size.
    ///
    /// Colors are always off so rendered text is stable.
    pub fn with_query(
        characters: Vec<Character>,
        query: QueryState,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let app = TuiApp::with_terminal(
            terminal,
            AppState::new(characters, query),
            KeyBindings::default(),
            Theme::new(ColorConfig::fixed(false)),
        );

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Renders afterwards, like the event loop does, so queued effects
    /// are applied before the next key.
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let key_event = KeyEvent::new(key, mods);
        let quit = self.app.handle_key_test(key_event);

        if quit {
            self.running = false;
        } else {
            // TestBackend rendering cannot fail
            let _ = self.app.render_test();
        }

        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Type text (sends individual character key events)
    ///
    /// Useful for search input and other text entry scenarios.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Names of the rows on the current page, in display order.
    pub fn visible_names(&self) -> Vec<String> {
        self.state()
            .result()
            .visible
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
