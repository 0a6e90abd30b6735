use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("failed to launch {path}: {source}")]
    Launch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("player exited before its IPC socket was ready ({0})")]
    ExitedEarly(String),

    #[error("timed out connecting to {0}")]
    ConnectTimeout(String),

    #[error("IPC error: {0}")]
    Ipc(#[from] std::io::Error),

    #[error("failed to encode IPC command: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IPC connection closed")]
    Closed,
}
