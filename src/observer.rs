//! Tick observer trait for monitoring simulation progress.

use crate::body::BodyId;

/// Trait for observing arena physics ticks.
///
/// Implement this trait to monitor the step pipeline (e.g., for debugging,
/// sound triggers, or collision counters). All methods have default
/// no-op implementations.
pub trait TickObserver {
    /// Called when a body reflects off an arena wall.
    fn on_wall_bounce(&mut self, _id: BodyId) {}

    /// Called when a pair of bodies collides and is resolved.
    fn on_collision(&mut self, _a: BodyId, _b: BodyId) {}

    /// Called when a tick is fully resolved, integrated, and published.
    fn on_step_complete(&mut self, _tick: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpTickObserver;

impl TickObserver for NoOpTickObserver {}
