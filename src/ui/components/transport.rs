use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Previous,
    PlayPause,
    Next,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Previous, Button::PlayPause, Button::Next];

    pub fn label(self, is_playing: bool) -> &'static str {
        match self {
            Button::Previous => "◀",
            Button::PlayPause if is_playing => "Pause",
            Button::PlayPause => "Play",
            Button::Next => "▶",
        }
    }
}

/// A transport key. Holds no state of its own: whether it looks pressed is
/// decided by the caller.
pub struct TransportButton {
    button: Button,
    is_playing: bool,
    pressed: bool,
}

impl TransportButton {
    pub fn new(button: Button, is_playing: bool, pressed: bool) -> Self {
        Self {
            button,
            is_playing,
            pressed,
        }
    }
}

impl Widget for TransportButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (fg, bg, border_set) = if self.pressed {
            (colors::BUTTON, colors::BUTTON_TEXT, border::THICK)
        } else {
            (colors::BUTTON_TEXT, colors::BUTTON, border::ROUNDED)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(Style::new().fg(colors::OUTLINE))
            .style(Style::new().bg(bg));

        Paragraph::new(self.button.label(self.is_playing))
            .style(Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
