use std::sync::{Arc, Mutex};

use crate::embed::traits::{PlaylistEmbed, TrackInfo};

/// In-memory embed that records the commands it receives.
#[derive(Default)]
pub struct RecordingEmbed {
    calls: Mutex<Vec<&'static str>>,
    title: Mutex<Option<String>>,
}

impl RecordingEmbed {
    pub fn with_title(title: &str) -> Arc<Self> {
        let embed = Self::default();
        embed.set_title(title);
        Arc::new(embed)
    }

    pub fn set_title(&self, title: &str) {
        *self.title.lock().unwrap() = Some(title.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PlaylistEmbed for RecordingEmbed {
    fn play(&self) {
        self.record("play");
    }

    fn pause(&self) {
        self.record("pause");
    }

    fn next(&self) {
        self.record("next");
    }

    fn previous(&self) {
        self.record("previous");
    }

    fn current_track_info(&self) -> TrackInfo {
        TrackInfo {
            title: self.title.lock().unwrap().clone(),
        }
    }
}
