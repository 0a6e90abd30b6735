const DOTS: [&str; 4] = ["", ".", "..", "..."];

#[derive(Debug, Clone, PartialEq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub dot_count: u8,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            is_loading: true,
            dot_count: 0,
        }
    }
}

impl LoadingState {
    pub fn dots(&self) -> &'static str {
        DOTS[usize::from(self.dot_count.min(3))]
    }

    /// Appends a dot, or clears them once there are three.
    pub fn tick(&mut self) {
        if !self.is_loading {
            return;
        }
        self.dot_count = if self.dot_count < 3 {
            self.dot_count + 1
        } else {
            0
        };
    }

    /// Ends the loading phase. Returns false if it had already ended.
    pub fn finish(&mut self) -> bool {
        std::mem::replace(&mut self.is_loading, false)
    }
}
