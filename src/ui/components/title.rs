use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::util::colors;

const MARQUEE_GAP: &str = "   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMode {
    Truncate,
    Marquee,
}

impl TitleMode {
    pub fn for_title(title: &str, threshold: usize) -> Self {
        if title.chars().count() > threshold {
            TitleMode::Marquee
        } else {
            TitleMode::Truncate
        }
    }
}

/// Cuts `title` to `width` columns, ending in an ellipsis when anything was
/// dropped.
pub fn truncate(title: &str, width: usize) -> String {
    if title.width() <= width {
        return title.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in title.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// The visible slice of a scrolling title, `offset` characters into the
/// title-plus-gap loop.
pub fn marquee_window(title: &str, offset: usize, width: usize) -> String {
    let cycle: Vec<char> = title.chars().chain(MARQUEE_GAP.chars()).collect();
    let start = offset % cycle.len();

    let mut out = String::new();
    let mut used = 0;
    for ch in cycle.iter().cycle().skip(start).take(cycle.len() + width) {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(*ch);
        used += w;
    }
    out
}

pub struct TitleDisplay<'a> {
    title: &'a str,
    threshold: usize,
    offset: usize,
}

impl<'a> TitleDisplay<'a> {
    pub fn new(title: &'a str, threshold: usize, offset: usize) -> Self {
        Self {
            title,
            threshold,
            offset,
        }
    }
}

impl Widget for TitleDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::OUTLINE))
            .style(Style::new().bg(colors::DISPLAY));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let style = Style::new().fg(colors::DISPLAY_TEXT).bg(colors::DISPLAY);
        let text = match TitleMode::for_title(self.title, self.threshold) {
            TitleMode::Truncate => Paragraph::new(truncate(self.title, width))
                .alignment(Alignment::Center),
            TitleMode::Marquee => Paragraph::new(marquee_window(self.title, self.offset, width))
                .alignment(Alignment::Left),
        };
        text.style(style).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "An Extremely Long Song Title Indeed";

    fn rendered(title: &str, offset: usize) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, 22, 3));
        TitleDisplay::new(title, 15, offset).render(buf.area, &mut buf);
        (1..21).map(|x| buf[(x, 1)].symbol()).collect()
    }

    #[test]
    fn mode_switches_past_threshold() {
        assert_eq!(TitleMode::for_title("Track One", 15), TitleMode::Truncate);
        assert_eq!(TitleMode::for_title("Exactly15Chars!", 15), TitleMode::Truncate);
        assert_eq!(TitleMode::for_title(LONG, 15), TitleMode::Marquee);
        assert_eq!(TitleMode::for_title(LONG, 40), TitleMode::Truncate);
    }

    #[test]
    fn short_title_is_centered() {
        let row = rendered("Track One", 0);
        assert_eq!(row.trim(), "Track One");
        assert!(row.starts_with(' '));
    }

    #[test]
    fn long_title_scrolls() {
        assert_eq!(rendered(LONG, 0), "An Extremely Long So");
        assert_eq!(rendered(LONG, 3), "Extremely Long Song ");
        assert_ne!(rendered(LONG, 0), rendered(LONG, 1));
    }

    #[test]
    fn marquee_wraps_through_gap() {
        let len = LONG.chars().count();
        assert_eq!(marquee_window(LONG, len, 6), "   An ");
        assert_eq!(marquee_window(LONG, len + 3, 6), marquee_window(LONG, 0, 6));
    }

    #[test]
    fn truncation_adds_ellipsis() {
        assert_eq!(truncate("Track One", 20), "Track One");
        assert_eq!(truncate("Track One", 6), "Track…");
        assert_eq!(truncate("Track One", 0), "");
    }

    #[test]
    fn wide_characters_fit_columns() {
        let window = marquee_window("日本語の歌のタイトルです", 0, 5);
        assert_eq!(window, "日本");
        assert_eq!(truncate("日本語の歌", 5), "日本…");
    }
}
