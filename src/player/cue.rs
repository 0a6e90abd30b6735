use std::{io::Cursor, path::Path, sync::Arc};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::warn;

use crate::player::error::CueError;

static CLICK_WAV: &[u8] = include_bytes!("../../assets/click.wav");

/// Short feedback sound played on every transport command.
pub trait Cue {
    fn trigger(&self) -> Result<(), CueError>;
}

pub struct ClickCue {
    _stream: OutputStream,
    sink: Sink,
    sound: Arc<[u8]>,
}

impl ClickCue {
    pub fn new(sound: Arc<[u8]>) -> Result<Self, CueError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| CueError::DeviceError(e.to_string()))?;
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            _stream: stream,
            sink,
            sound,
        })
    }
}

impl Cue for ClickCue {
    fn trigger(&self) -> Result<(), CueError> {
        let decoder = Decoder::builder()
            .with_data(Cursor::new(self.sound.clone()))
            .with_hint("wav")
            .build()
            .map_err(|e| CueError::DecodingError(e.to_string()))?;

        // Each trigger restarts the sound from the beginning.
        self.sink.clear();
        self.sink.append(decoder);
        self.sink.play();
        Ok(())
    }
}

pub struct SilentCue;

impl Cue for SilentCue {
    fn trigger(&self) -> Result<(), CueError> {
        Ok(())
    }
}

pub fn load_sound(path: Option<&Path>) -> Result<Arc<[u8]>, CueError> {
    match path {
        Some(path) => Ok(std::fs::read(path)?.into()),
        None => Ok(CLICK_WAV.into()),
    }
}

/// Opens the click cue on the default output device. Any failure leaves the
/// deck silent instead of failing start-up.
pub fn open(path: Option<&Path>) -> Box<dyn Cue> {
    let sound = load_sound(path).unwrap_or_else(|e| {
        warn!("Using built-in click sound: {e}");
        CLICK_WAV.into()
    });

    match ClickCue::new(sound) {
        Ok(cue) => Box::new(cue),
        Err(e) => {
            warn!("Click cue disabled: {e}");
            Box::new(SilentCue)
        }
    }
}
