use ratatui::{
    crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
};
use tracing::{info, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        layout::DeckLayout,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }

        Ok(())
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => Self::handle_init(app),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Resize(width, height) => app.area = Rect::new(0, 0, width, height),
            TerminalEvent::Tick => {}
        }

        Ok(())
    }

    pub fn handle_init(app: &mut App) {
        app.splash.start(&mut app.task_manager, app.event_tx.clone());
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::EmbedReady => {
                app.mirror.on_embed_ready(app.embed.clone());
                info!(title = app.mirror.current_track_title(), "Embed ready");
            }
            Event::EmbedStateChanged(state) => app.mirror.on_embed_state_changed(state),
            Event::EmbedFailed(reason) => warn!("Player unavailable: {reason}"),
            Event::SplashTick => app.splash.on_tick(),
            Event::SplashFinished => app.splash.on_finished(&mut app.task_manager),
            Event::ButtonReleased(button) => {
                if app.pressed == Some(button) {
                    app.pressed = None;
                }
            }
        }

        app.sync_title();
    }

    pub fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(msg) = InputHandler::handle_key(key) {
            app.update(msg);
        }
    }

    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
        let over = DeckLayout::compute(app.area).button_at(Position::new(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(button) = over {
                    app.update(AppMessage::Press(button));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => app.update(AppMessage::Release(over)),
            _ => {}
        }
    }
}
