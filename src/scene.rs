//! Initial scene configuration and validation.

use crate::arena::Arena;
use crate::body::Body;
use crate::error::SceneError;
use crate::float::Float;
use alloc::collections::BTreeSet;
use alloc::vec::Vec as AllocVec;

/// Builder for the initial scene: arena dimensions plus an ordered body list.
///
/// Insertion order is preserved and observable (pair resolution order, and the
/// last-match-wins grab hit test).
///
/// # Builder Pattern
/// ```
/// use carom::{SceneConfig, Body, Vec2, colors};
///
/// let arena = SceneConfig::new(800.0f32, 600.0)
///     .with_body(Body::new(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 20.0, colors::RED))
///     .with_body(Body::new(2, Vec2::new(200.0, 200.0), Vec2::new(-1.0, -1.0), 30.0, colors::BLUE))
///     .build()
///     .unwrap();
/// assert_eq!(arena.bodies().len(), 2);
/// ```
pub struct SceneConfig<F: Float> {
    width: F,
    height: F,
    bodies: AllocVec<Body<F>>,
}

impl<F: Float> SceneConfig<F> {
    /// Start a scene with the given arena dimensions.
    pub fn new(width: F, height: F) -> Self {
        SceneConfig { width, height, bodies: AllocVec::new() }
    }

    /// Append a body to the scene.
    pub fn with_body(mut self, body: Body<F>) -> Self {
        self.bodies.push(body);
        self
    }

    /// Validate the scene and build the arena.
    ///
    /// Rejects non-positive or non-finite dimensions and radii, and duplicate
    /// body ids. After this point the simulation cannot fault.
    pub fn build(self) -> Result<Arena<F>, SceneError> {
        if !(self.width > F::zero() && self.height > F::zero())
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(SceneError::InvalidDimensions);
        }

        let mut seen = BTreeSet::new();
        for body in &self.bodies {
            if !(body.radius > F::zero()) || !body.radius.is_finite() {
                return Err(SceneError::InvalidRadius { id: body.id });
            }
            if !seen.insert(body.id) {
                return Err(SceneError::DuplicateId { id: body.id });
            }
        }

        Ok(Arena::new(self.width, self.height, self.bodies))
    }
}
