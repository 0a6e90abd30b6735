use serde::Deserialize;
use serde_json::Value;

use crate::embed::state::EmbedState;

pub const PAUSE_OBSERVER: u64 = 1;
pub const TITLE_OBSERVER: u64 = 2;

/// One line read from the mpv IPC socket: either a reply (`request_id`,
/// `error`) or an event (`event`, plus `name`/`data` for property changes).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MpvMessage {
    pub event: Option<String>,
    pub name: Option<String>,
    pub data: Option<Value>,
    pub reason: Option<String>,
    pub request_id: Option<u64>,
    pub error: Option<String>,
}

impl MpvMessage {
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Ready,
    StateChanged(EmbedState),
    Title(Option<String>),
    RequestFailed { request_id: Option<u64>, error: String },
}

/// Folds the mpv message stream into embed signals.
///
/// State changes are only reported after the first file has loaded; before
/// that the player has nothing to play or pause.
#[derive(Debug)]
pub struct IpcTranslator {
    ready: bool,
    paused: bool,
}

impl Default for IpcTranslator {
    fn default() -> Self {
        Self {
            ready: false,
            paused: true,
        }
    }
}

impl IpcTranslator {
    pub fn new(paused: bool) -> Self {
        Self {
            ready: false,
            paused,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn translate(&mut self, msg: &MpvMessage) -> Vec<Signal> {
        if let Some(error) = &msg.error {
            if error != "success" {
                return vec![Signal::RequestFailed {
                    request_id: msg.request_id,
                    error: error.clone(),
                }];
            }
            return vec![];
        }

        match msg.event.as_deref() {
            Some("property-change") => self.property_change(msg),
            Some("file-loaded") if !self.ready => {
                self.ready = true;
                vec![Signal::Ready]
            }
            Some("playback-restart") if self.ready && !self.paused => {
                vec![Signal::StateChanged(EmbedState::Playing)]
            }
            Some("end-file") if msg.reason.as_deref() == Some("eof") => {
                vec![Signal::StateChanged(EmbedState::Ended)]
            }
            _ => vec![],
        }
    }

    fn property_change(&mut self, msg: &MpvMessage) -> Vec<Signal> {
        match msg.name.as_deref() {
            Some("pause") => {
                let Some(paused) = msg.data.as_ref().and_then(Value::as_bool) else {
                    return vec![];
                };
                self.paused = paused;
                if !self.ready {
                    return vec![];
                }
                let state = if paused {
                    EmbedState::Paused
                } else {
                    EmbedState::Playing
                };
                vec![Signal::StateChanged(state)]
            }
            Some("media-title") => {
                let title = msg
                    .data
                    .as_ref()
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let mut signals = vec![Signal::Title(title)];
                if self.ready && !self.paused {
                    signals.push(Signal::StateChanged(EmbedState::Playing));
                }
                signals
            }
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(translator: &mut IpcTranslator, line: &str) -> Vec<Signal> {
        translator.translate(&MpvMessage::parse(line).unwrap())
    }

    #[test]
    fn pause_changes_before_load_are_silent() {
        let mut t = IpcTranslator::default();
        let signals = feed(
            &mut t,
            r#"{"event":"property-change","id":1,"name":"pause","data":true}"#,
        );
        assert!(signals.is_empty());
        assert!(!t.is_ready());
    }

    #[test]
    fn first_file_loaded_is_ready_once() {
        let mut t = IpcTranslator::default();
        assert_eq!(feed(&mut t, r#"{"event":"file-loaded"}"#), vec![Signal::Ready]);
        assert!(feed(&mut t, r#"{"event":"file-loaded"}"#).is_empty());
    }

    #[test]
    fn pause_property_maps_to_state() {
        let mut t = IpcTranslator::default();
        feed(&mut t, r#"{"event":"file-loaded"}"#);
        assert_eq!(
            feed(&mut t, r#"{"event":"property-change","name":"pause","data":false}"#),
            vec![Signal::StateChanged(EmbedState::Playing)]
        );
        assert_eq!(
            feed(&mut t, r#"{"event":"property-change","name":"pause","data":true}"#),
            vec![Signal::StateChanged(EmbedState::Paused)]
        );
    }

    #[test]
    fn title_change_while_playing_refreshes() {
        let mut t = IpcTranslator::new(false);
        feed(&mut t, r#"{"event":"file-loaded"}"#);
        assert_eq!(
            feed(
                &mut t,
                r#"{"event":"property-change","name":"media-title","data":"Song A"}"#
            ),
            vec![
                Signal::Title(Some("Song A".to_string())),
                Signal::StateChanged(EmbedState::Playing),
            ]
        );
    }

    #[test]
    fn title_change_while_paused_only_updates_info() {
        let mut t = IpcTranslator::default();
        assert_eq!(
            feed(
                &mut t,
                r#"{"event":"property-change","name":"media-title","data":null}"#
            ),
            vec![Signal::Title(None)]
        );
    }

    #[test]
    fn playback_restart_only_when_unpaused() {
        let mut t = IpcTranslator::default();
        feed(&mut t, r#"{"event":"file-loaded"}"#);
        assert!(feed(&mut t, r#"{"event":"playback-restart"}"#).is_empty());
        feed(&mut t, r#"{"event":"property-change","name":"pause","data":false}"#);
        assert_eq!(
            feed(&mut t, r#"{"event":"playback-restart"}"#),
            vec![Signal::StateChanged(EmbedState::Playing)]
        );
    }

    #[test]
    fn end_of_file_is_ended() {
        let mut t = IpcTranslator::default();
        assert_eq!(
            feed(&mut t, r#"{"event":"end-file","reason":"eof"}"#),
            vec![Signal::StateChanged(EmbedState::Ended)]
        );
        assert!(feed(&mut t, r#"{"event":"end-file","reason":"stop"}"#).is_empty());
    }

    #[test]
    fn failed_replies_are_reported() {
        let mut t = IpcTranslator::default();
        assert!(feed(&mut t, r#"{"request_id":3,"error":"success","data":null}"#).is_empty());
        assert_eq!(
            feed(&mut t, r#"{"request_id":4,"error":"property unavailable"}"#),
            vec![Signal::RequestFailed {
                request_id: Some(4),
                error: "property unavailable".to_string()
            }]
        );
    }
}
