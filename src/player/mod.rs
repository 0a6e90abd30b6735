pub mod cue;
pub mod error;
pub mod mirror;
pub mod state;

pub use mirror::PlaybackMirror;
pub use state::PlaybackState;
