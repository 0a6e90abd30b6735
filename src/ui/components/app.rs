use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Widget},
};

use crate::{
    ui::{
        app::App,
        components::{
            knob::Knob,
            reel::{Reel, TapeWindow},
            splash::SplashView,
            title::TitleDisplay,
            transport::{Button, TransportButton},
        },
        layout::DeckLayout,
        util::{marquee_offset, reel_frame},
    },
    util::colors,
};

fn panel(bg: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::THICK)
        .border_style(Style::new().fg(colors::OUTLINE))
        .style(Style::new().bg(bg))
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        if self.splash.is_loading() {
            SplashView::new(self.splash.state().dots()).render(area, buf);
            return;
        }

        let layout = DeckLayout::compute(area);
        let elapsed = self.elapsed();
        let state = self.mirror.state();

        panel(colors::BODY)
            .title_top("cassette")
            .title_alignment(Alignment::Center)
            .title_style(Style::new().add_modifier(Modifier::BOLD))
            .render(layout.body, buf);

        panel(colors::PANEL).render(layout.top_panel, buf);
        Knob.render(layout.left_knob, buf);
        TitleDisplay::new(
            &state.current_track_title,
            self.config.marquee_threshold,
            marquee_offset(self.title_elapsed()),
        )
        .render(layout.title, buf);
        Knob.render(layout.right_knob, buf);

        panel(colors::PANEL).render(layout.cassette, buf);
        let frame = reel_frame(state.is_playing, elapsed);
        Reel::new(frame).render(layout.left_reel, buf);
        TapeWindow.render(layout.tape, buf);
        Reel::new(frame).render(layout.right_reel, buf);

        for button in Button::ALL {
            TransportButton::new(button, state.is_playing, self.pressed == Some(button))
                .render(layout.button(button), buf);
        }
    }
}
