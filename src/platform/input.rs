//! Stop signals polled once per frame

/// External "should continue" signal
pub trait Control {
    fn should_continue(&mut self) -> bool;
}

/// Never asks the loop to stop
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysRun;

impl Control for AlwaysRun {
    fn should_continue(&mut self) -> bool {
        true
    }
}

/// Allows a fixed number of frames, then stops
#[derive(Debug, Clone, Copy)]
pub struct FrameLimit {
    remaining: u64,
}

impl FrameLimit {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl Control for FrameLimit {
    fn should_continue(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
