//! The arena: authoritative body store and per-tick orchestration.

use crate::body::{Body, BodyId};
use crate::collide;
use crate::float::Float;
use crate::observer::TickObserver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A fixed rectangular arena holding the authoritative body list.
///
/// Construct via [`SceneConfig::build`](crate::scene::SceneConfig::build),
/// which validates the initial scene. Dimensions are immutable afterwards.
///
/// Each [`step`](Arena::step) resolves collisions and integrates into a
/// freshly allocated next-state buffer, then publishes it by a single
/// assignment. A reader holding the previous snapshot (a renderer mid-draw)
/// never observes a half-updated tick.
#[derive(Debug)]
pub struct Arena<F: Float> {
    width: F,
    height: F,
    bodies: AllocVec<Body<F>>,
    held: Option<BodyId>,
    tick: u64,
}

impl<F: Float> Arena<F> {
    pub(crate) fn new(width: F, height: F, bodies: AllocVec<Body<F>>) -> Self {
        Arena { width, height, bodies, held: None, tick: 0 }
    }

    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }

    /// The current published snapshot, in insertion order.
    pub fn bodies(&self) -> &[Body<F>] {
        &self.bodies
    }

    /// Look up a body by id.
    pub fn body(&self, id: BodyId) -> Option<&Body<F>> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Ticks completed since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The body currently held by the pointer, if any.
    pub fn held(&self) -> Option<BodyId> {
        self.held
    }

    /// Mark `id` as pointer-held. Returns false (and holds nothing) for an
    /// unknown id. A held body's position is owned by the pointer: the step
    /// pipeline keeps updating its velocity but never writes its position.
    pub fn hold(&mut self, id: BodyId) -> bool {
        if self.bodies.iter().any(|b| b.id == id) {
            self.held = Some(id);
            true
        } else {
            false
        }
    }

    /// Write the held body's position immediately (not deferred to the next
    /// tick). No-op when nothing is held. Velocity is left untouched.
    pub fn move_held(&mut self, pos: Vec2<F>) {
        if let Some(id) = self.held {
            if let Some(body) = self.bodies.iter_mut().find(|b| b.id == id) {
                body.pos = pos;
            }
        }
    }

    /// Release the held body back to full physics on the next tick.
    pub fn release(&mut self) {
        self.held = None;
    }

    /// Advance the simulation by one tick.
    ///
    /// Pipeline: wall resolution per body, then every unordered pair in
    /// insertion order, then unit-step integration. The held body skips wall
    /// resolution and integration (its position is pointer-owned) but still
    /// collides against the others.
    pub fn step<O: TickObserver>(&mut self, observer: &mut O) {
        let mut next = self.bodies.clone();

        for body in next.iter_mut() {
            if self.held == Some(body.id) {
                continue;
            }
            collide::resolve_walls(body, self.width, self.height, observer);
        }

        let count = next.len();
        for i in 0..count {
            for j in (i + 1)..count {
                collide::resolve_pair(&mut next, i, j, self.held, observer);
            }
        }

        for body in next.iter_mut() {
            if self.held == Some(body.id) {
                continue;
            }
            body.integrate();
        }

        self.tick += 1;
        // Single-assignment publish of the new snapshot.
        self.bodies = next;
        observer.on_step_complete(self.tick);
    }
}
