//! Error types for scene construction.

use crate::body::BodyId;
use core::fmt;

/// Errors rejected at scene-construction time.
///
/// The physics invariants (positive radii, unique ids) are enforced here,
/// once, so steady-state ticking never faults.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Arena dimensions must be positive and finite.
    InvalidDimensions,
    /// Body radius must be positive and finite.
    InvalidRadius { id: BodyId },
    /// Two bodies in the initial scene share an id.
    DuplicateId { id: BodyId },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidDimensions => {
                write!(f, "arena dimensions must be positive and finite")
            }
            SceneError::InvalidRadius { id } => {
                write!(f, "body {} has a non-positive or non-finite radius", id)
            }
            SceneError::DuplicateId { id } => {
                write!(f, "duplicate body id {} in initial scene", id)
            }
        }
    }
}
