//! Platform abstraction layer
//!
//! Everything the simulation needs from the outside world, as capabilities:
//! - Time/ticks ([`Clock`])
//! - Quit signal ([`Control`])
//! - Frame output ([`Renderer`])
//!
//! [`run`] drives one simulation with them on the calling thread.

pub mod input;
pub mod render;
pub mod time;

pub use input::{AlwaysRun, Control, FrameLimit};
pub use render::{BallView, FrameLogRenderer, NullRenderer, Renderer};
pub use time::{Clock, FixedRateClock, SteppedClock};

use crate::sim::{Boundary, SimState, tick};

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Wall contacts resolved over the whole run
    pub contacts: u64,
    /// Simulated seconds
    pub sim_time: f64,
}

/// Run the simulation until `control` says stop or the renderer closes
///
/// Each frame: poll control, take `dt` from the clock, tick the simulation,
/// hand the fresh walls and ball to the renderer.
pub fn run<B, C, R, Q>(
    state: &mut SimState<B>,
    clock: &mut C,
    renderer: &mut R,
    control: &mut Q,
) -> RunSummary
where
    B: Boundary,
    C: Clock + ?Sized,
    R: Renderer + ?Sized,
    Q: Control + ?Sized,
{
    let mut summary = RunSummary::default();
    let start_time = state.time;

    while control.should_continue() {
        let dt = clock.tick();
        let report = tick(state, dt);
        summary.contacts += report.contacts as u64;
        summary.frames += 1;

        renderer.present(&state.boundary.edges(), BallView::from(&state.ball));
        if renderer.is_closed() {
            log::info!("Renderer closed, stopping");
            break;
        }
    }

    summary.sim_time = state.time - start_time;
    log::info!(
        "Stopped after {} frames ({:.2}s simulated, {} contacts)",
        summary.frames,
        summary.sim_time,
        summary.contacts
    );
    summary
}
