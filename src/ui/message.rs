use crate::ui::components::transport::Button;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // User Input
    Quit,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,

    // Pointer
    Press(Button),
    Release(Option<Button>),
}
