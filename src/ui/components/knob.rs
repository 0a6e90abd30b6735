use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

pub struct Knob;

impl Widget for Knob {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::OUTLINE))
            .style(Style::new().bg(colors::BODY));

        Paragraph::new("◉")
            .style(Style::new().fg(colors::OUTLINE).bg(colors::BODY))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
