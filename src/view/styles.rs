//! Color and style configuration.
//!
//! All widget styles come from a [`Theme`] so that `--no-color` / `NO_COLOR`
//! turns every color off in one place.

use crate::model::Status;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors, ignoring the environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles used by the browser widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colors: bool,
    /// Title bar text.
    pub header: Style,
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Border of unfocused panes.
    pub border: Style,
    /// Table column headers and filter group headings.
    pub section_header: Style,
    /// Highlighted table row / filter option.
    pub highlight: Style,
    /// Hints and disabled controls.
    pub muted: Style,
    /// Key names in hints and the help overlay.
    pub key: Style,
    /// Field labels in the detail panel.
    pub label: Style,
    /// Warning text (partial list notice).
    pub warning: Style,
}

impl Theme {
    /// Build the theme for a color configuration.
    ///
    /// Without colors, emphasis falls back to modifiers only so the focused
    /// pane and highlighted row stay distinguishable.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                colors: true,
                header: Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::LightGreen),
                border: Style::default().fg(Color::DarkGray),
                section_header: Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
                highlight: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::Gray),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                label: Style::default().add_modifier(Modifier::BOLD),
                warning: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                colors: false,
                header: Style::default().add_modifier(Modifier::BOLD),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                section_header: Style::default().add_modifier(Modifier::BOLD),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default(),
                key: Style::default().add_modifier(Modifier::BOLD),
                label: Style::default().add_modifier(Modifier::BOLD),
                warning: Style::default(),
            }
        }
    }

    /// Border style for a pane given its focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }

    /// Status cell color: green alive, red dead, gray unknown.
    pub fn status(&self, status: Status) -> Style {
        if !self.colors {
            return Style::default();
        }
        match status {
            Status::Alive => Style::default().fg(Color::Green),
            Status::Dead => Style::default().fg(Color::Red),
            Status::Unknown => Style::default().fg(Color::Gray),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::fixed(true))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ===== ColorConfig Tests =====

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");

        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    // ===== Theme Tests =====

    #[test]
    fn theme_without_colors_has_no_foregrounds() {
        let theme = Theme::new(ColorConfig::fixed(false));

        assert_eq!(theme.muted.fg, None);
        assert_eq!(theme.focused_border.fg, None);
        assert_eq!(theme.status(Status::Dead), Style::default());
    }

    #[test]
    fn theme_without_colors_still_marks_highlight() {
        let theme = Theme::new(ColorConfig::fixed(false));
        assert!(theme.highlight.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn theme_status_colors_are_distinct() {
        let theme = Theme::default();
        assert_ne!(theme.status(Status::Alive), theme.status(Status::Dead));
        assert_ne!(theme.status(Status::Dead), theme.status(Status::Unknown));
    }

    #[test]
    fn border_for_switches_on_focus() {
        let theme = Theme::default();
        assert_eq!(theme.border_for(true), theme.focused_border);
        assert_eq!(theme.border_for(false), theme.border);
    }
}
