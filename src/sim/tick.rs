//! Simulation tick
//!
//! Advances the boundary and the ball by one step of the caller's `dt`, then
//! resolves the ball against the freshly moved walls.

use super::boundary::Boundary;
use super::collision::resolve_against_boundary;
use super::state::{SimState, StepReport};

/// Advance the simulation state by `dt` seconds
pub fn tick<B: Boundary>(state: &mut SimState<B>, dt: f32) -> StepReport {
    state.boundary.advance(dt);

    let params = state.params;
    let ball = &mut state.ball;
    ball.apply_gravity(dt, params.gravity);
    ball.integrate(dt);
    ball.apply_damping(params.damping);

    let contacts = resolve_against_boundary(ball, &state.boundary, &params.collision);

    state.time += f64::from(dt);
    state.ticks += 1;

    log::trace!(
        "tick {}: ball ({:.2}, {:.2}) vel ({:.2}, {:.2}), {} contact(s)",
        state.ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y,
        contacts
    );

    StepReport { contacts }
}
