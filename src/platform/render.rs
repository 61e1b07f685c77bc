//! Frame output
//!
//! Drawing itself lives outside this crate. A renderer receives the six walls
//! and the ball once per frame.

use std::io::Write;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Ball, Segment};

/// What a renderer needs to draw the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub center: Vec2,
    pub radius: f32,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            center: ball.pos,
            radius: ball.radius,
        }
    }
}

/// Consumer of per-frame state
pub trait Renderer {
    fn present(&mut self, edges: &[Segment], ball: BallView);

    /// True once the output is gone and further frames would be lost
    fn is_closed(&self) -> bool {
        false
    }
}

/// Discards frames, only counts them
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn present(&mut self, _edges: &[Segment], _ball: BallView) {
        self.frames += 1;
    }
}

/// One line of frame log output
#[derive(Debug, Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    edges: &'a [Segment],
    ball: BallView,
}

/// Writes each frame as one JSON object per line
///
/// The first failed write closes the renderer; later frames are dropped.
pub struct FrameLogRenderer<W: Write> {
    out: W,
    frame: u64,
    write_errors: u64,
    closed: bool,
}

impl<W: Write> FrameLogRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frame: 0,
            write_errors: 0,
            closed: false,
        }
    }

    /// Frames that could not be written
    pub fn write_errors(&self) -> u64 {
        self.write_errors
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, record: &FrameRecord<'_>) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for FrameLogRenderer<W> {
    fn present(&mut self, edges: &[Segment], ball: BallView) {
        if self.closed {
            return;
        }
        let record = FrameRecord {
            frame: self.frame,
            edges,
            ball,
        };
        if let Err(e) = self.write_frame(&record) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                log::info!("Frame output closed at frame {}", self.frame);
            } else {
                log::warn!("Frame {} not written: {}", self.frame, e);
            }
            self.write_errors += 1;
            self.closed = true;
        }
        self.frame += 1;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
