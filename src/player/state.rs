pub const LOADING_TITLE: &str = "Loading...";
pub const UNKNOWN_TRACK: &str = "Unknown Track";

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_track_title: String,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_track_title: LOADING_TITLE.to_string(),
        }
    }
}
