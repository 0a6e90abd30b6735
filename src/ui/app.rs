use std::{sync::Arc, time::Duration};

use flume::{Receiver, Sender};

use ratatui::{Frame, layout::Rect};
use tokio::time::Instant;
use tracing::debug;

use crate::{
    config::Config,
    embed::{MpvEmbed, PlaylistEmbed},
    event::events::Event,
    player::{
        PlaybackMirror,
        cue::{self, Cue},
    },
    splash::SplashTimer,
    ui::{components::transport::Button, message::AppMessage},
    util::task::TaskManager,
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub const EMBED_TASK: &str = "embed";
pub const RELEASE_TASK: &str = "button_release";

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub config: Config,
    pub embed: Arc<dyn PlaylistEmbed>,
    pub mirror: PlaybackMirror,
    pub splash: SplashTimer,
    pub pressed: Option<Button>,
    pub task_manager: TaskManager,
    pub area: Rect,
    pub has_focus: bool,
    pub should_quit: bool,
    started: Instant,
    title: String,
    title_since: Instant,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let (embed, embed_task) = MpvEmbed::launch(config.embed.clone(), event_tx.clone());
        let cue = cue::open(config.click_sound.as_deref());

        let mut app = Self::from_parts(config, Arc::new(embed), cue, (event_tx, event_rx));
        app.task_manager.spawn(EMBED_TASK, embed_task);
        app
    }

    pub fn from_parts(
        config: Config,
        embed: Arc<dyn PlaylistEmbed>,
        cue: Box<dyn Cue>,
        (event_tx, event_rx): (Sender<Event>, Receiver<Event>),
    ) -> Self {
        let splash = SplashTimer::new(config.splash_duration, config.dot_period);
        let mirror = PlaybackMirror::new(cue);
        let now = Instant::now();

        Self {
            event_rx,
            event_tx,
            config,
            embed,
            title: mirror.current_track_title().to_string(),
            mirror,
            splash,
            pressed: None,
            task_manager: TaskManager::new(),
            area: Rect::default(),
            has_focus: true,
            should_quit: false,
            started: now,
            title_since: now,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        self.area = frame.area();
        if self.has_focus {
            frame.render_widget(&*self, frame.area());
        }
    }

    /// Time since startup; drives the reels.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time since the displayed title last changed; drives the marquee.
    pub fn title_elapsed(&self) -> Duration {
        self.title_since.elapsed()
    }

    /// Restarts the marquee when the mirror reports a different title.
    pub fn sync_title(&mut self) {
        let current = self.mirror.current_track_title();
        if current != self.title {
            self.title = current.to_string();
            self.title_since = Instant::now();
        }
    }

    pub fn controls_visible(&self) -> bool {
        !self.splash.is_loading()
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => self.activate(Button::PlayPause),
            AppMessage::NextTrack => self.activate(Button::Next),
            AppMessage::PreviousTrack => self.activate(Button::Previous),
            AppMessage::Press(button) => {
                if self.controls_visible() {
                    self.pressed = Some(button);
                }
            }
            AppMessage::Release(over) => {
                if let Some(button) = self.pressed.take()
                    && over == Some(button)
                {
                    self.fire(button);
                }
            }
        }
    }

    /// Keyboard activation: shows the button pressed, fires it, and
    /// schedules the release.
    fn activate(&mut self, button: Button) {
        if !self.controls_visible() {
            return;
        }

        self.pressed = Some(button);
        self.fire(button);

        let event_tx = self.event_tx.clone();
        let delay = self.config.button_release;
        self.task_manager.spawn(
            RELEASE_TASK,
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = event_tx.send(Event::ButtonReleased(button));
            }),
        );
    }

    fn fire(&mut self, button: Button) {
        debug!(?button, "Transport command");
        match button {
            Button::PlayPause => self.mirror.toggle_play(),
            Button::Next => self.mirror.next(),
            Button::Previous => self.mirror.previous(),
        }
    }
}
