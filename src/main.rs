//! Spinning Hexagon entry point
//!
//! Runs the simulation headless at the configured frame rate and writes one
//! JSON frame per tick to stdout. Stops after `max_frames` or when stdout is
//! closed. Usage: `spinning-hexagon [settings.json]`

use std::process::ExitCode;

use spinning_hexagon::Settings;
use spinning_hexagon::platform::{AlwaysRun, FixedRateClock, FrameLimit, FrameLogRenderer, run};
use spinning_hexagon::sim::SimState;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Spinning Hexagon starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{path}: {e}");
                return ExitCode::from(2);
            }
        },
        None => Settings::default(),
    };

    if let Err(e) = settings.validate() {
        log::error!("Invalid settings: {e}");
        return ExitCode::from(2);
    }

    let mut state = SimState::from_settings(&settings);
    log::info!(
        "Hexagon r={} at {:?} spinning {}°/s, ball r={} at {:?}, {} fps",
        settings.hex_radius,
        settings.hex_center,
        settings.hex_angular_speed_deg,
        settings.ball_radius,
        settings.ball_pos,
        settings.fps
    );

    let mut clock = FixedRateClock::new(settings.fps);
    let mut renderer = FrameLogRenderer::new(std::io::stdout().lock());

    match settings.max_frames {
        Some(frames) => run(&mut state, &mut clock, &mut renderer, &mut FrameLimit::new(frames)),
        None => run(&mut state, &mut clock, &mut renderer, &mut AlwaysRun),
    };

    ExitCode::SUCCESS
}
