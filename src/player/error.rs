use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueError {
    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Failed to read cue file: {0}")]
    Io(#[from] std::io::Error),
}
