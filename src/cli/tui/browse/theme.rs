use ratatui::style::{Color, Modifier, Style};

use crate::render::PlaceholderKind;

/// Consistent theme for the TUI
pub struct Theme {
    pub focused: Style,
    pub unfocused: Style,
    pub button: Style,
    pub button_focused: Style,
    pub heading: Style,
    pub link: Style,
    pub error: Style,
    pub muted: Style,
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            unfocused: Style::default()
                .fg(Color::White),
            button: Style::default()
                .fg(Color::Cyan),
            button_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            heading: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Border style for a widget depending on focus
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused
        } else {
            self.unfocused
        }
    }

    /// Style for a placeholder message
    pub fn placeholder_style(&self, kind: PlaceholderKind) -> Style {
        match kind {
            PlaceholderKind::NoResults => self.muted,
            PlaceholderKind::LoadFailed => self.error,
        }
    }
}
