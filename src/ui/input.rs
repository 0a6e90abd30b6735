use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('k'), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('l'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Right, _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('h'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Left, _) => Some(AppMessage::PreviousTrack),
            _ => None,
        }
    }
}
