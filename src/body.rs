//! Circular bodies — the unit of simulation.

use crate::float::Float;
use crate::render::Color;
use crate::vec::Vec2;

/// Unique, immutable body identifier. Assigned by the scene at startup.
pub type BodyId = u32;

/// A circular body: center position, velocity, radius, and an opaque color token.
///
/// Velocity is expressed in arena units per tick, not per second — the physics
/// constants are tied to the tick rate of whatever scheduler drives
/// [`Arena::step`](crate::arena::Arena::step).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body<F: Float> {
    /// Unique id, immutable for the body's lifetime.
    pub id: BodyId,
    /// Center position.
    pub pos: Vec2<F>,
    /// Velocity in arena units per tick.
    pub vel: Vec2<F>,
    /// Radius, strictly positive, immutable post-creation.
    pub radius: F,
    /// Opaque color token (0xAARRGGBB). Never interpreted by the physics core.
    pub color: Color,
}

impl<F: Float> Body<F> {
    pub fn new(id: BodyId, pos: Vec2<F>, vel: Vec2<F>, radius: F, color: Color) -> Self {
        Body { id, pos, vel, radius, color }
    }

    /// Advance position by one tick of velocity (unit-step Euler).
    pub fn integrate(&mut self) {
        self.pos = self.pos + self.vel;
    }

    /// Whether `point` lies strictly inside this body's circle.
    ///
    /// Used for the pointer hit test; a point exactly on the rim misses.
    pub fn contains(&self, point: Vec2<F>) -> bool {
        self.pos.distance_sq(point) < self.radius * self.radius
    }
}
