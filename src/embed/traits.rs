#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackInfo {
    pub title: Option<String>,
}

/// Control surface of a hidden playlist player.
///
/// Commands are fire-and-forget: implementations queue them and return at
/// once. Lifecycle events (`ready`, `state_changed`) are not part of the
/// trait; they arrive on the application's event channel.
pub trait PlaylistEmbed: Send + Sync {
    fn play(&self);
    fn pause(&self);
    fn next(&self);
    fn previous(&self);
    fn current_track_info(&self) -> TrackInfo;
}
