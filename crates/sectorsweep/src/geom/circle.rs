use super::Point;
use crate::error::GeometryError;

/// Closed disk: center plus positive radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn r2(&self) -> f64 {
        self.radius * self.radius
    }

    /// Boundary-inclusive containment: `|p − c|² ≤ r²`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (p - self.center).r2() <= self.r2()
    }

    /// Bearing of `p` seen from the center, in (−π, π].
    #[inline]
    pub fn bearing(&self, p: Point) -> f64 {
        (p - self.center).angle()
    }
}
