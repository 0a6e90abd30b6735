use crate::{embed::state::EmbedState, ui::components::transport::Button};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Embed
    EmbedReady,
    EmbedStateChanged(EmbedState),
    EmbedFailed(String),

    // Splash
    SplashTick,
    SplashFinished,

    // Controls
    ButtonReleased(Button),
}
