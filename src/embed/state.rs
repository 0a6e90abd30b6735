/// Player state as reported by the embed. Numbering follows the YouTube
/// player so codes read the same in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
    Other(i32),
}

impl EmbedState {
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => EmbedState::Unstarted,
            0 => EmbedState::Ended,
            1 => EmbedState::Playing,
            2 => EmbedState::Paused,
            3 => EmbedState::Buffering,
            5 => EmbedState::Cued,
            other => EmbedState::Other(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            EmbedState::Unstarted => -1,
            EmbedState::Ended => 0,
            EmbedState::Playing => 1,
            EmbedState::Paused => 2,
            EmbedState::Buffering => 3,
            EmbedState::Cued => 5,
            EmbedState::Other(code) => *code,
        }
    }
}
