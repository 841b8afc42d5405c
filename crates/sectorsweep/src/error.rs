//! Error types.
//!
//! - `GeometryError`: rejected constructor arguments (radius, arc, arm).
//! - `CyclicError`: misuse of `CyclicSeq` (empty sequence, zero step).
//! - `SweepError`: failures surfaced while a sweep forms groups.

use thiserror::Error;

use crate::alias::PointId;

/// Invalid parameters passed to a geometry constructor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("arc must lie in (0°, 360°), got {:.3}°", .0.to_degrees())]
    InvalidArc(f64),

    #[error("arm angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}

/// Misuse of a cyclic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CyclicError {
    #[error("cyclic sequence is empty")]
    Empty,

    #[error("step cannot be zero")]
    ZeroStep,
}

/// Failures while enumerating groups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// The same original point was reached twice inside one window.
    #[error("point {0} appears more than once in a group")]
    DuplicatePoint(PointId),

    #[error(transparent)]
    Cyclic(#[from] CyclicError),

    /// Wing/gap ordering contradicts the window being covered by one sector.
    #[error("alignment invariant violated: wing={wing}, delta1={delta1}, delta2={delta2}")]
    AlignmentInvariant { wing: f64, delta1: f64, delta2: f64 },

    /// The sweep did not return to its first group within the step budget.
    #[error("sweep did not close after {steps} steps over {aliases} aliases")]
    NoClosure { steps: usize, aliases: usize },
}
