//! Central theme configuration for the TUI.
//!
//! Two palettes exist, light and dark. The active one is picked per draw
//! from [`ThemeMode`] and applied to the root frame, so every widget
//! inherits its background and foreground.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label of the toggle: names the mode a toggle would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark",
            ThemeMode::Dark => "Light",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // Root frame
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,

    // Brand colors
    pub primary: Color,
    pub accent: Color,
    pub secondary: Color,

    // Header / footer bars (bg, fg)
    pub header: (Color, Color),
    pub footer: (Color, Color),

    // Panels
    pub border: Color,
    pub border_focused: Color,
    pub input_bg: Color,
    pub cursor: Color,

    // Feedback
    pub error: Color,
    pub success: Color,

    // Dashboard table
    pub table_header: (Color, Color),
    pub row_highlight_bg: Color,
    pub status: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            text: Color::Rgb(33, 37, 41),
            text_muted: Color::Rgb(108, 117, 125),

            primary: Color::Rgb(25, 118, 210),  // #1976d2
            accent: Color::Rgb(255, 152, 0),    // #ff9800
            secondary: Color::Rgb(66, 66, 66),  // #424242

            header: (Color::Rgb(25, 118, 210), Color::Rgb(255, 255, 255)),
            footer: (Color::Rgb(66, 66, 66), Color::Rgb(255, 255, 255)),

            border: Color::Rgb(206, 212, 218),
            border_focused: Color::Rgb(25, 118, 210),
            input_bg: Color::Rgb(248, 249, 250), // #f8f9fa
            cursor: Color::Rgb(25, 118, 210),

            error: Color::Rgb(211, 47, 47), // #d32f2f
            success: Color::Rgb(25, 118, 210),

            table_header: (Color::Rgb(25, 118, 210), Color::Rgb(255, 255, 255)),
            row_highlight_bg: Color::Rgb(227, 242, 253), // #e3f2fd
            status: Color::Rgb(25, 118, 210),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(26, 26, 26),
            text: Color::Rgb(240, 240, 240),
            text_muted: Color::Rgb(160, 160, 160),

            primary: Color::Rgb(100, 181, 246),
            accent: Color::Rgb(255, 167, 38),
            secondary: Color::Rgb(189, 189, 189),

            header: (Color::Rgb(13, 71, 161), Color::Rgb(255, 255, 255)),
            footer: (Color::Rgb(38, 38, 38), Color::Rgb(224, 224, 224)),

            border: Color::Rgb(73, 80, 87),
            border_focused: Color::Rgb(100, 181, 246),
            input_bg: Color::Rgb(45, 45, 45),
            cursor: Color::Rgb(255, 167, 38),

            error: Color::Rgb(239, 83, 80),
            success: Color::Rgb(129, 199, 132),

            table_header: (Color::Rgb(13, 71, 161), Color::Rgb(255, 255, 255)),
            row_highlight_bg: Color::Rgb(55, 71, 79),
            status: Color::Rgb(100, 181, 246),
        }
    }

    // Style builders

    /// Style applied to the whole screen.
    pub fn root_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    pub fn input_style(&self) -> Style {
        Style::default().bg(self.input_bg).fg(self.text)
    }

    /// Style for a submit button, dimmed while disabled.
    pub fn button_style(&self, focused: bool, disabled: bool) -> Style {
        if disabled {
            Style::default()
                .bg(self.border)
                .fg(self.text_muted)
        } else if focused {
            Style::default()
                .bg(self.accent)
                .fg(Color::Rgb(255, 255, 255))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(self.primary)
                .fg(Color::Rgb(255, 255, 255))
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::SLOW_BLINK)
    }

    pub fn nav_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .bg(self.accent)
                .fg(Color::Rgb(255, 255, 255))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.header.0).fg(self.header.1)
        }
    }
}

static LIGHT: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();
static DARK: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the palette for a mode
pub fn theme(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Light => LIGHT.get_or_init(Theme::light),
        ThemeMode::Dark => DARK.get_or_init(Theme::dark),
    }
}
