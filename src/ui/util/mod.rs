pub mod handler;

use std::time::Duration;

pub const REEL_FRAME_MS: u128 = 120;
pub const MARQUEE_STEP_MS: u128 = 150;

const REEL_FRAMES: usize = 4;

pub fn reel_frame(is_spinning: bool, elapsed: Duration) -> usize {
    if is_spinning {
        (elapsed.as_millis() / REEL_FRAME_MS) as usize % REEL_FRAMES
    } else {
        0
    }
}

pub fn marquee_offset(elapsed: Duration) -> usize {
    (elapsed.as_millis() / MARQUEE_STEP_MS) as usize
}
