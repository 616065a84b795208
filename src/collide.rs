//! Collision resolution: wall reflection and pairwise elastic impulses.
//!
//! Pure numeric routines over body slices. [`Arena::step`](crate::arena::Arena::step)
//! drives them in order (walls first, then every unordered pair); they are also
//! public for hosts that want to run a custom pipeline.
//!
//! Pairwise resolution mutates as it iterates: a later pair sees the outputs of
//! an earlier pair within the same tick. With three or more mutually
//! overlapping bodies the outcome therefore depends on insertion order. That
//! order is stable, so the result is deterministic — a documented first-order
//! approximation, not a simultaneous-impulse solver.

use crate::body::{Body, BodyId};
use crate::float::Float;
use crate::observer::TickObserver;
use crate::vec::Vec2;

/// Reflect `body` off the arena walls, each axis independently.
///
/// Crossing a wall negates that axis's velocity and clamps the center back to
/// the nearest valid boundary, so a body never renders outside the arena.
pub fn resolve_walls<F: Float, O: TickObserver>(
    body: &mut Body<F>,
    width: F,
    height: F,
    observer: &mut O,
) {
    if body.pos.x - body.radius < F::zero() || body.pos.x + body.radius > width {
        body.vel.x = -body.vel.x;
        body.pos.x = body.pos.x.clamp(body.radius, width - body.radius);
        observer.on_wall_bounce(body.id);
    }
    if body.pos.y - body.radius < F::zero() || body.pos.y + body.radius > height {
        body.vel.y = -body.vel.y;
        body.pos.y = body.pos.y.clamp(body.radius, height - body.radius);
        observer.on_wall_bounce(body.id);
    }
}

/// Resolve one unordered pair `(i, j)` if their circles overlap.
///
/// Velocities are rotated into the collision-normal frame (the line joining
/// the centers), exchanged with the standard 1-D elastic formula using radius
/// as mass, and rotated back with the tangential components unchanged. The
/// pair is then pushed apart by the full overlap, split evenly.
///
/// The angle-based formulation never divides by the center distance, so
/// coincident centers (distance zero) resolve cleanly: `atan2(0, 0)` is 0 by
/// convention and the pair separates along the x axis.
///
/// A body named by `held` is pointer-controlled: its velocity still takes the
/// impulse (it resumes physics on release), but its position is never written —
/// the free partner absorbs the full overlap instead of half.
pub fn resolve_pair<F: Float, O: TickObserver>(
    bodies: &mut [Body<F>],
    i: usize,
    j: usize,
    held: Option<BodyId>,
    observer: &mut O,
) {
    let a = bodies[i];
    let b = bodies[j];

    let delta = a.pos - b.pos;
    let dist = delta.length();
    if dist >= a.radius + b.radius {
        return;
    }

    let angle = F::atan2(delta.y, delta.x);
    let sine = angle.sin();
    let cosine = angle.cos();

    // Rotate velocities into the normal/tangential frame.
    let a_n = a.vel.x * cosine + a.vel.y * sine;
    let a_t = a.vel.y * cosine - a.vel.x * sine;
    let b_n = b.vel.x * cosine + b.vel.y * sine;
    let b_t = b.vel.y * cosine - b.vel.x * sine;

    // 1-D elastic collision along the normal, radius standing in for mass.
    let a_n_new = ((a.radius - b.radius) * a_n + F::two() * b.radius * b_n)
        / (a.radius + b.radius);
    let b_n_new = (a_n - b_n) + a_n_new;

    bodies[i].vel = Vec2::new(a_n_new * cosine - a_t * sine, a_t * cosine + a_n_new * sine);
    bodies[j].vel = Vec2::new(b_n_new * cosine - b_t * sine, b_t * cosine + b_n_new * sine);

    // Push the pair apart along the normal by the full overlap.
    let overlap = a.radius + b.radius - dist;
    let push = Vec2::new(overlap * cosine, overlap * sine);
    let a_held = held == Some(a.id);
    let b_held = held == Some(b.id);
    if a_held {
        bodies[j].pos = bodies[j].pos - push;
    } else if b_held {
        bodies[i].pos = bodies[i].pos + push;
    } else {
        bodies[i].pos = bodies[i].pos + push.scale(F::half());
        bodies[j].pos = bodies[j].pos - push.scale(F::half());
    }

    observer.on_collision(a.id, b.id);
}
