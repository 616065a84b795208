//! Tiny 2D arena physics for games and demos.
//!
//! `carom` animates circular bodies inside a fixed rectangular arena:
//! velocity integration at a fixed tick rate, wall bounding, and pairwise
//! elastic circle-circle collisions with radius standing in for mass. A
//! pointer controller lets a host grab a body and drag it while the rest of
//! the scene keeps colliding against it.
//!
//! # Features
//!
//! - **Elastic collisions**: Normal-frame 1-D exchange plus overlap separation
//! - **Wall reflection**: Per-axis velocity negation with position clamping
//! - **Pointer grab**: Idle/Armed state machine writing straight into the store
//! - **Snapshot publish**: Each tick builds a fresh body list, published atomically
//! - **Observable**: Monitor bounces and collisions via the `TickObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! The host supplies the externals: a fixed-rate scheduler calling
//! [`Arena::step`], a pointer source feeding [`Grab`], and a [`Renderer`]
//! drawing the snapshot from [`Arena::bodies`].

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod body;
pub mod collide;
pub mod arena;
pub mod grab;
pub mod scene;
pub mod render;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use body::{Body, BodyId};
pub use arena::Arena;
pub use grab::Grab;
pub use scene::SceneConfig;
pub use render::{colors, Color, NoOpRenderer, Renderer};
pub use observer::{NoOpTickObserver, TickObserver};
pub use error::SceneError;
