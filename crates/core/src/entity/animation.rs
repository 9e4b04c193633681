use super::SpriteCell;

/// Cycles through sprite cells, one step per `delay_ms` of accumulated time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<SpriteCell>,
    current: usize,
    delay_ms: u32,
    elapsed_ms: u32,
}

impl Animation {
    pub fn new(delay_ms: u32, frames: Vec<SpriteCell>) -> Self {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        Self { frames, current: 0, delay_ms, elapsed_ms: 0 }
    }

    /// Advances by at most one frame, however much time has passed.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.delay_ms {
            self.elapsed_ms = 0;
            self.current = (self.current + 1) % self.frames.len();
        }
    }

    pub fn current_frame(&self) -> SpriteCell {
        self.frames[self.current]
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.elapsed_ms = 0;
    }
}
