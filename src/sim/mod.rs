//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Time step comes from the caller, never from a clock
//! - Edges are checked in a fixed order every tick
//! - No rendering or platform dependencies

pub mod ball;
pub mod boundary;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod vector;

pub use ball::Ball;
pub use boundary::{Boundary, RotatingHexagon};
pub use collision::{
    CollisionParams, Contact, detect_contact, inward_normal, resolve_against_boundary,
    resolve_contact,
};
pub use geometry::{Segment, closest_point_on_segment, hexagon_vertices, polygon_edges};
pub use state::{SimParams, SimState, StepReport};
pub use tick::tick;
pub use vector::{normalize, reflect, reflect_with_restitution};
