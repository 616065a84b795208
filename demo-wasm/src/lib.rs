//! Browser canvas demo: three balls bouncing in an 800x600 arena.
//!
//! The JS host owns the externals: a `setInterval(1000 / 60)` (or rAF) loop
//! calls `tick()` and redraws from `body_data()`, canvas mouse handlers feed
//! `pointer_down` / `pointer_move` / `pointer_up` in canvas coordinates, and
//! teardown clears the interval.

use carom::{colors, Arena, Body, Grab, NoOpTickObserver, SceneConfig, Vec2};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ArenaDemo {
    arena: Arena<f32>,
    grab: Grab<f32>,
}

#[wasm_bindgen]
impl ArenaDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let arena = SceneConfig::new(800.0f32, 600.0)
            .with_body(Body::new(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 20.0, colors::RED))
            .with_body(Body::new(2, Vec2::new(200.0, 200.0), Vec2::new(-1.0, -1.0), 30.0, colors::BLUE))
            .with_body(Body::new(3, Vec2::new(300.0, 300.0), Vec2::new(-1.0, -1.0), 40.0, colors::BLACK))
            .build()
            .expect("static demo scene is valid");
        ArenaDemo { arena, grab: Grab::new() }
    }

    /// One physics step. Call at a fixed rate (reference: 1000/60 ms).
    pub fn tick(&mut self) {
        self.arena.step(&mut NoOpTickObserver);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.grab.down(&mut self.arena, Vec2::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.grab.drag(&mut self.arena, Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.grab.up(&mut self.arena);
    }

    pub fn width(&self) -> f32 {
        self.arena.width()
    }

    pub fn height(&self) -> f32 {
        self.arena.height()
    }

    pub fn body_count(&self) -> usize {
        self.arena.bodies().len()
    }

    /// Snapshot as flat [x, y, radius, ...] triples for canvas drawing.
    pub fn body_data(&self) -> Vec<f32> {
        let bodies = self.arena.bodies();
        let mut out = Vec::with_capacity(bodies.len() * 3);
        for b in bodies {
            out.push(b.pos.x);
            out.push(b.pos.y);
            out.push(b.radius);
        }
        out
    }

    /// Per-body 0xAARRGGBB color tokens, same order as `body_data`.
    pub fn body_colors(&self) -> Vec<u32> {
        self.arena.bodies().iter().map(|b| b.color).collect()
    }
}

impl Default for ArenaDemo {
    fn default() -> Self {
        Self::new()
    }
}
