//! Dark palette used across the browser.

use ratatui::style::{Color, Modifier, Style};

pub(crate) const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);
pub(crate) const CARD_BACKGROUND: Color = Color::Rgb(0x1e, 0x1e, 0x1e);
pub(crate) const TEXT: Color = Color::Rgb(0xe4, 0xe6, 0xeb);
pub(crate) const SECONDARY_TEXT: Color = Color::Rgb(0xb0, 0xb3, 0xb8);
pub(crate) const BORDER: Color = Color::Rgb(0x3e, 0x40, 0x42);
pub(crate) const INPUT_BACKGROUND: Color = Color::Rgb(0x3a, 0x3b, 0x3c);
pub(crate) const PRIMARY: Color = Color::Rgb(0x2d, 0x88, 0xff);

pub(crate) fn base() -> Style {
    Style::default().fg(TEXT).bg(BACKGROUND)
}

pub(crate) fn secondary() -> Style {
    Style::default().fg(SECONDARY_TEXT)
}

pub(crate) fn border(active: bool) -> Style {
    if active {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(BORDER)
    }
}

pub(crate) fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub(crate) fn key_hint() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub(crate) fn input() -> Style {
    Style::default().fg(TEXT).bg(INPUT_BACKGROUND)
}
