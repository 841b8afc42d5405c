//! Geometry primitives: points, circles, sectors.
//!
//! Purpose
//! - Provide the exact predicates the sweep relies on: bearing from a center,
//!   boundary-inclusive disk containment, arm-inclusive sector containment.
//! - Keep fixed and moving sectors apart: `Sector` is an immutable value that
//!   groups can hold; `MovingSector` is the sweep's scratch position.
//!
//! Code cross-refs: `angle::{reduce_angle, clockwise_distance}`, `sweep::GroupSweep`.

mod circle;
mod point;
mod sector;

pub use circle::Circle;
pub use point::Point;
pub use sector::{MovingSector, Sector};

#[cfg(test)]
mod tests;
