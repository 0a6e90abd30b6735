pub mod config;
pub mod embed;
pub mod event;
pub mod player;
pub mod splash;
pub mod ui;
pub mod util;
