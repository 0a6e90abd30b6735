use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

/// Spoke positions for one turn of the reel, a quarter turn per frame.
const FRAMES: [[&str; 3]; 4] = [
    ["  │  ", "  ●  ", "  │  "],
    ["   ╱ ", "  ●  ", " ╱   "],
    ["     ", "──●──", "     "],
    [" ╲   ", "  ●  ", "   ╲ "],
];

pub struct Reel {
    frame: usize,
}

impl Reel {
    pub fn new(frame: usize) -> Self {
        Self {
            frame: frame % FRAMES.len(),
        }
    }
}

impl Widget for Reel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::OUTLINE))
            .style(Style::new().bg(colors::BODY));

        let lines: Vec<Line> = FRAMES[self.frame].iter().map(|l| Line::from(*l)).collect();
        Paragraph::new(lines)
            .style(Style::new().fg(colors::OUTLINE).bg(colors::BODY))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// The dark strip of tape running between the reels.
pub struct TapeWindow;

impl Widget for TapeWindow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let y = area.y + area.height / 2;
        let strip = Rect::new(area.x, y, area.width, 1);
        buf.set_style(strip, Style::new().bg(colors::TAPE));
    }
}
