use std::sync::Arc;

use tracing::debug;

use crate::{
    embed::{PlaylistEmbed, TrackInfo, state::EmbedState},
    player::{
        cue::Cue,
        state::{PlaybackState, UNKNOWN_TRACK},
    },
};

/// Mirrors the embed's playback state into UI state and forwards transport
/// commands to it. Every method is a silent no-op until the embed is ready.
pub struct PlaybackMirror {
    embed: Option<Arc<dyn PlaylistEmbed>>,
    state: PlaybackState,
    cue: Box<dyn Cue>,
}

impl PlaybackMirror {
    pub fn new(cue: Box<dyn Cue>) -> Self {
        Self {
            embed: None,
            state: PlaybackState::default(),
            cue,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn current_track_title(&self) -> &str {
        &self.state.current_track_title
    }

    pub fn has_embed(&self) -> bool {
        self.embed.is_some()
    }

    pub fn on_embed_ready(&mut self, embed: Arc<dyn PlaylistEmbed>) {
        self.state.current_track_title = title_or_unknown(embed.current_track_info());
        self.embed = Some(embed);
    }

    pub fn on_embed_state_changed(&mut self, state: EmbedState) {
        match state {
            EmbedState::Playing => {
                self.refresh_title();
                self.state.is_playing = true;
            }
            EmbedState::Paused | EmbedState::Ended => {
                self.state.is_playing = false;
            }
            _ => {}
        }
    }

    /// Optimistic: the state flips now, not when the embed echoes it back.
    pub fn toggle_play(&mut self) {
        self.click();
        let Some(embed) = &self.embed else {
            return;
        };

        if self.state.is_playing {
            embed.pause();
            self.state.is_playing = false;
        } else {
            embed.play();
            self.state.is_playing = true;
        }
    }

    pub fn next(&mut self) {
        self.click();
        if let Some(embed) = &self.embed {
            embed.next();
        }
    }

    pub fn previous(&mut self) {
        self.click();
        if let Some(embed) = &self.embed {
            embed.previous();
        }
    }

    fn refresh_title(&mut self) {
        if let Some(embed) = &self.embed {
            self.state.current_track_title = title_or_unknown(embed.current_track_info());
        }
    }

    fn click(&self) {
        if let Err(e) = self.cue.trigger() {
            debug!("Click cue failed: {e}");
        }
    }
}

fn title_or_unknown(info: TrackInfo) -> String {
    info.title
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_TRACK.to_string())
}
