pub mod app;
pub mod knob;
pub mod reel;
pub mod splash;
pub mod title;
pub mod transport;
