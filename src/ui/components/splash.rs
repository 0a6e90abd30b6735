use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::util::colors;

pub struct SplashView<'a> {
    dots: &'a str,
}

impl<'a> SplashView<'a> {
    pub fn new(dots: &'a str) -> Self {
        Self { dots }
    }
}

impl Widget for SplashView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        // Padded so the word stays put while the dots change.
        Line::from(format!("Loading{:<3}", self.dots))
            .style(
                Style::new()
                    .fg(colors::BUTTON)
                    .add_modifier(Modifier::BOLD),
            )
            .centered()
            .render(row, buf);
    }
}
