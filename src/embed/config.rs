pub const DEFAULT_PLAYLIST_ID: &str = "PL9LkJszkF_Z6bJ82689htd2wch-HVbzCO";

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedConfig {
    pub playlist_id: String,
    pub autoplay: bool,
    pub show_controls: bool,
    pub mpv_path: String,
}

impl EmbedConfig {
    pub fn playlist_url(&self) -> String {
        format!("https://www.youtube.com/playlist?list={}", self.playlist_id)
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            playlist_id: DEFAULT_PLAYLIST_ID.to_string(),
            autoplay: false,
            show_controls: false,
            mpv_path: "mpv".to_string(),
        }
    }
}
