use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum MpvCommand {
    SetPaused(bool),
    PlaylistNext,
    PlaylistPrev,
    ObserveProperty(u64, &'static str),
    Quit,
}

#[derive(Serialize)]
struct Request {
    command: Value,
    request_id: u64,
}

impl MpvCommand {
    fn args(&self) -> Value {
        match self {
            MpvCommand::SetPaused(paused) => json!(["set_property", "pause", paused]),
            MpvCommand::PlaylistNext => json!(["playlist-next"]),
            MpvCommand::PlaylistPrev => json!(["playlist-prev"]),
            MpvCommand::ObserveProperty(id, name) => json!(["observe_property", id, name]),
            MpvCommand::Quit => json!(["quit"]),
        }
    }

    /// Encodes the command as one newline-terminated IPC line.
    pub fn encode(&self, request_id: u64) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(&Request {
            command: self.args(),
            request_id,
        })?;
        line.push('\n');
        Ok(line)
    }
}
