//! # Theme System
//!
//! Centralized colors for the WatchMe TUI.
//!
//! Rendering code references [`Theme`] fields instead of hardcoding
//! `ratatui::style::Color` values. The active theme is chosen by name from
//! the persisted configuration.

use ratatui::style::Color;

/// All colors used by the WatchMe TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name used in the config file.
    pub name: &'static str,

    /// Main background color for panels and the help modal.
    pub bg: Color,
    /// Primary text color (genre titles, movie titles).
    pub fg: Color,
    /// Muted text (runtime, poster URLs, footer hints).
    pub fg_dim: Color,

    /// Primary accent: brand, focused borders, cursor-row background.
    pub accent: Color,
    /// Secondary accent: the current category in the header.
    pub secondary: Color,
    /// Rating values on movie cards.
    pub rating: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),        // base
        fg: Color::Rgb(205, 214, 244),     // text
        fg_dim: Color::Rgb(108, 112, 134), // overlay0
        accent: Color::Rgb(137, 180, 250), // blue
        secondary: Color::Rgb(203, 166, 247), // mauve
        rating: Color::Rgb(249, 226, 175), // yellow
    },
    // 1 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(189, 147, 249), // purple
        rating: Color::Rgb(241, 250, 140),    // yellow
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(180, 142, 173), // aurora purple
        rating: Color::Rgb(235, 203, 139),    // yellow
    },
    // 3 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),    // aqua
        secondary: Color::Rgb(211, 134, 155), // purple
        rating: Color::Rgb(250, 189, 47),     // yellow
    },
];
