//! Angle helpers shared by the geometry and the sweep.
//!
//! Conventions
//! - Angles are radians, normalized into the half-open interval (−π, π].
//! - "Clockwise" means decreasing angle; the sweep rotates clockwise.

pub use std::f64::consts::{PI, TAU};

/// Map any finite angle into (−π, π].
///
/// Values already inside the interval are returned unchanged, so the result is
/// exact at π. `reduce_angle(-π) == π`. Non-finite input is returned as-is.
#[inline]
pub fn reduce_angle(angle: f64) -> f64 {
    if (angle > -PI && angle <= PI) || !angle.is_finite() {
        return angle;
    }
    let r = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs.
    if r > PI {
        r - TAU
    } else {
        r
    }
}

/// Clockwise angular distance from `a1` to `a2`.
///
/// For normalized inputs the result lies in [0, 2π).
#[inline]
pub fn clockwise_distance(a1: f64, a2: f64) -> f64 {
    if a1 >= a2 {
        a1 - a2
    } else {
        a1 - a2 + TAU
    }
}
