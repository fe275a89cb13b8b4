//! Table styling configuration.
//!
//! Status badges get a color per state (pending yellow, completed/active green,
//! rejected/blocked red). Everything collapses to plain text under `NO_COLOR`.

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
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for the table screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyles {
    /// Column header row.
    pub header: Style,
    /// Row under the cursor.
    pub selected: Style,
    /// Current page marker in the pager.
    pub current_page: Style,
    /// Other page markers and ellipses.
    pub page_marker: Style,
    /// Search bar border while typing.
    pub search_active: Style,
    /// Active filter badges.
    pub filter_badge: Style,
    /// Hint and status line.
    pub muted: Style,
    colors: bool,
}

impl TableStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                selected: reversed,
                current_page: bold.fg(Color::Black).bg(Color::Cyan),
                page_marker: Style::default(),
                search_active: Style::default().fg(Color::Yellow),
                filter_badge: Style::default().fg(Color::Black).bg(Color::Blue),
                muted: Style::default().fg(Color::DarkGray),
                colors: true,
            }
        } else {
            Self {
                header: bold,
                selected: reversed,
                current_page: bold.add_modifier(Modifier::REVERSED),
                page_marker: Style::default(),
                search_active: bold,
                filter_badge: reversed,
                muted: Style::default(),
                colors: false,
            }
        }
    }

    /// Style for a status or role cell, keyed by its label.
    pub fn badge(&self, label: &str) -> Style {
        if !self.colors {
            return Style::default();
        }
        match label {
            "pending" => Style::default().fg(Color::Yellow),
            "completed" | "active" => Style::default().fg(Color::Green),
            "rejected" | "blocked" => Style::default().fg(Color::Red),
            "admin" => Style::default().fg(Color::Magenta),
            "moderator" => Style::default().fg(Color::Blue),
            _ => Style::default(),
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

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
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR with any value should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn badges_colored_by_status() {
        let styles = TableStyles::with_color_config(ColorConfig::new(true));
        assert_eq!(styles.badge("rejected").fg, Some(Color::Red));
        assert_eq!(styles.badge("blocked").fg, Some(Color::Red));
        assert_eq!(styles.badge("completed").fg, Some(Color::Green));
        assert_eq!(styles.badge("pending").fg, Some(Color::Yellow));
        assert_eq!(styles.badge("followers"), Style::default());
    }

    #[test]
    fn no_color_has_no_foregrounds() {
        let styles = TableStyles::with_color_config(ColorConfig::new(false));
        assert_eq!(styles.badge("rejected"), Style::default());
        assert_eq!(styles.header.fg, None);
        assert_eq!(styles.current_page.fg, None);
    }
}
