pub mod commands;
pub mod config;
pub mod error;
pub mod ipc;
pub mod mpv;
pub mod state;
#[cfg(test)]
pub mod testing;
pub mod traits;

pub use mpv::MpvEmbed;
pub use traits::{PlaylistEmbed, TrackInfo};
