//! Pointer interaction: grab a body and drag it around.

use crate::arena::Arena;
use crate::body::BodyId;
use crate::float::Float;
use crate::vec::Vec2;

/// State captured while a body is held.
#[derive(Copy, Clone, Debug)]
struct Held<F: Float> {
    id: BodyId,
    /// Body center minus pointer position at grab time, so the body doesn't
    /// jump under the cursor on the first drag.
    offset: Vec2<F>,
}

/// Two-state pointer controller: Idle, or Armed with one held body.
///
/// Translates pointer down/move/up events (in arena-local coordinates) into
/// position writes on the [`Arena`]. While Armed, the held body's position is
/// pointer-owned; its velocity is deliberately left alone, so on release the
/// body resumes its last physics-maintained velocity. There is no "throw" —
/// pointer motion never becomes velocity.
pub struct Grab<F: Float> {
    held: Option<Held<F>>,
}

impl<F: Float> Grab<F> {
    pub fn new() -> Self {
        Grab { held: None }
    }

    /// Whether a body is currently held.
    pub fn armed(&self) -> bool {
        self.held.is_some()
    }

    /// The held body's id, if Armed.
    pub fn held_body(&self) -> Option<BodyId> {
        self.held.as_ref().map(|h| h.id)
    }

    /// Pointer-down: hit-test every body and arm on the last match in
    /// insertion order (when overlapping bodies both contain the pointer, the
    /// later one wins — the deterministic pick rule). A miss is silently
    /// ignored.
    pub fn down(&mut self, arena: &mut Arena<F>, pointer: Vec2<F>) {
        let mut hit = None;
        for body in arena.bodies() {
            if body.contains(pointer) {
                hit = Some(Held { id: body.id, offset: body.pos - pointer });
            }
        }
        if let Some(held) = hit {
            arena.hold(held.id);
            self.held = Some(held);
        }
    }

    /// Pointer-move: while Armed, write `pointer + offset` into the store
    /// immediately. No-op while Idle.
    pub fn drag(&mut self, arena: &mut Arena<F>, pointer: Vec2<F>) {
        if let Some(held) = &self.held {
            arena.move_held(pointer + held.offset);
        }
    }

    /// Pointer-up: release the body back to physics. No-op while Idle.
    pub fn up(&mut self, arena: &mut Arena<F>) {
        if self.held.take().is_some() {
            arena.release();
        }
    }
}

impl<F: Float> Default for Grab<F> {
    fn default() -> Self {
        Self::new()
    }
}
