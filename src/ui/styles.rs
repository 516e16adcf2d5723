use ratatui::style::{Color, Modifier, Style};

use super::markup::Tone;

// Color palette
pub const PRIMARY: Color = Color::Rgb(102, 126, 234);
pub const SECONDARY: Color = Color::Rgb(72, 187, 120);
pub const ACCENT: Color = Color::Rgb(192, 160, 64);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);

// Styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn input_style() -> Style {
    Style::default().bg(HIGHLIGHT).fg(Color::White)
}

pub fn button_style(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(MUTED)
    } else {
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Terminal style for a markup tone.
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => text_style(),
        Tone::Strong => text_style().add_modifier(Modifier::BOLD),
        Tone::Heading => title_style(),
        Tone::Success => success_style(),
        Tone::Failure => error_style(),
        Tone::Accent => highlight_style().add_modifier(Modifier::BOLD),
        Tone::Muted => muted_style(),
    }
}
