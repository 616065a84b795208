//! Render seam: the contract a drawing host implements, plus color tokens.
//!
//! The physics core never calls into a renderer. Hosts pull the current
//! snapshot via [`Arena::bodies`](crate::arena::Arena::bodies) each frame and
//! hand it to their `Renderer` — the core and the drawing surface stay
//! decoupled, and a renderer mid-draw never observes a half-updated tick.

use crate::body::Body;
use crate::float::Float;

/// Opaque 32-bit color token in `0xAARRGGBB` layout.
///
/// The core stores and forwards these, nothing more. A canvas host maps them
/// to CSS colors, a terminal host to ANSI, a test to nothing at all.
pub type Color = u32;

/// Predefined color tokens.
pub mod colors {
    use super::Color;

    pub const WHITE: Color = 0xFFFF_FFFF;
    pub const BLACK: Color = 0xFF00_0000;
    pub const RED: Color = 0xFFFF_0000;
    pub const GREEN: Color = 0xFF00_FF00;
    pub const BLUE: Color = 0xFF00_00FF;
    pub const YELLOW: Color = 0xFFFF_FF00;
    pub const GRAY: Color = 0xFF80_8080;
}

/// Trait for drawing surfaces that can render a body snapshot.
///
/// `draw` is called once per frame with the full snapshot and the arena
/// dimensions. Implementations should clear and redraw; they must not retain
/// per-call resources (the contract is "callable every tick forever").
pub trait Renderer<F: Float> {
    fn draw(&mut self, bodies: &[Body<F>], width: F, height: F);
}

/// A renderer that does nothing. Use for headless simulation.
pub struct NoOpRenderer;

impl<F: Float> Renderer<F> for NoOpRenderer {
    fn draw(&mut self, _bodies: &[Body<F>], _width: F, _height: F) {}
}
