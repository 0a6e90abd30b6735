use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};

use crate::ui::components::transport::Button;

pub const DECK_HEIGHT: u16 = 19;
pub const DECK_MIN_WIDTH: u16 = 56;
pub const DECK_MAX_WIDTH: u16 = 96;
pub const KNOB_WIDTH: u16 = 7;
pub const REEL_WIDTH: u16 = 11;

/// Placement of every part of the deck for a given terminal area.
///
/// Rendering and mouse hit-testing both derive from this, so a click lands
/// on exactly what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckLayout {
    pub body: Rect,
    pub top_panel: Rect,
    pub left_knob: Rect,
    pub title: Rect,
    pub right_knob: Rect,
    pub cassette: Rect,
    pub left_reel: Rect,
    pub tape: Rect,
    pub right_reel: Rect,
    pub previous: Rect,
    pub play_pause: Rect,
    pub next: Rect,
}

impl DeckLayout {
    pub fn compute(area: Rect) -> Self {
        let width = (area.width.saturating_mul(7) / 10)
            .clamp(DECK_MIN_WIDTH, DECK_MAX_WIDTH)
            .min(area.width);
        let height = DECK_HEIGHT.min(area.height);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [body] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(body);
        let top_panel = sections[0];
        let cassette = sections[2];
        let controls = sections[4];

        let top_inner = inset(top_panel);
        let [left_knob, title, right_knob] = Layout::horizontal([
            Constraint::Length(KNOB_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(KNOB_WIDTH),
        ])
        .spacing(2)
        .horizontal_margin(1)
        .areas(top_inner);

        let cassette_inner = inset(cassette);
        let [left_reel, tape, right_reel] = Layout::horizontal([
            Constraint::Length(REEL_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(REEL_WIDTH),
        ])
        .spacing(2)
        .horizontal_margin(3)
        .areas(cassette_inner);

        let [previous, play_pause, next] = Layout::horizontal([
            Constraint::Length(7),
            Constraint::Length(12),
            Constraint::Length(7),
        ])
        .spacing(4)
        .flex(Flex::Center)
        .areas(controls);

        Self {
            body,
            top_panel,
            left_knob,
            title,
            right_knob,
            cassette,
            left_reel,
            tape,
            right_reel,
            previous,
            play_pause,
            next,
        }
    }

    pub fn button(&self, button: Button) -> Rect {
        match button {
            Button::Previous => self.previous,
            Button::PlayPause => self.play_pause,
            Button::Next => self.next,
        }
    }

    pub fn button_at(&self, position: Position) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|button| self.button(*button).contains(position))
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
