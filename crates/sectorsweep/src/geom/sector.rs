//! Circular sectors: an immutable `Sector` and the sweep's `MovingSector`.
//!
//! A sector shares its circle's center and radius and covers the arc that
//! starts at `start_arm` and extends clockwise by `arc`:
//! `end_arm = start_arm − arc`. Both arms are inclusive.

use std::fmt;

use super::{Circle, Point};
use crate::angle::{reduce_angle, PI, TAU};
use crate::error::GeometryError;

/// Immutable sector. Groups hold these as snapshots of the sweep position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    circle: Circle,
    arc: f64,
    start: f64,
}

#[inline]
fn check_arc(arc: f64) -> Result<f64, GeometryError> {
    if arc > 0.0 && arc < TAU {
        Ok(arc)
    } else {
        Err(GeometryError::InvalidArc(arc))
    }
}

#[inline]
fn check_arm(arm: f64) -> Result<f64, GeometryError> {
    if arm.is_finite() {
        Ok(reduce_angle(arm))
    } else {
        Err(GeometryError::NonFiniteAngle(arm))
    }
}

impl Sector {
    /// Sector with the start arm at π (pointing along −x).
    pub fn new(circle: Circle, arc: f64) -> Result<Self, GeometryError> {
        Self::with_arms(circle, arc, PI)
    }

    /// Sector with an explicit start arm (any finite angle; normalized).
    pub fn with_arms(circle: Circle, arc: f64, start_arm: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            circle,
            arc: check_arc(arc)?,
            start: check_arm(start_arm)?,
        })
    }

    #[inline]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    #[inline]
    pub fn arc(&self) -> f64 {
        self.arc
    }

    /// Leading arm, in (−π, π].
    #[inline]
    pub fn start_arm(&self) -> f64 {
        self.start
    }

    /// Trailing arm `start − arc`, not normalized.
    #[inline]
    pub fn end_arm(&self) -> f64 {
        self.start - self.arc
    }

    #[inline]
    pub fn end_arm_reduced(&self) -> f64 {
        reduce_angle(self.end_arm())
    }

    /// Direction halfway between the arms.
    #[inline]
    pub fn bisector(&self) -> f64 {
        reduce_angle(self.start - self.arc / 2.0)
    }

    /// Copy with a new start arm (any finite angle; normalized).
    pub fn with_start_arm(&self, start_arm: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            start: check_arm(start_arm)?,
            ..*self
        })
    }

    /// Copy rotated clockwise by `theta`.
    pub fn rotated(&self, theta: f64) -> Self {
        let mut m = MovingSector::from(*self);
        m.rotate(theta);
        m.snapshot()
    }

    /// Whether the direction `phi` lies on or between the arms.
    pub fn is_angle_inside(&self, phi: f64) -> bool {
        let phi = reduce_angle(phi);
        let start = self.start;
        let end = self.end_arm_reduced();
        if end > start {
            // wraps through the ±π seam
            (end <= phi && phi <= PI) || (-PI < phi && phi <= start)
        } else {
            end <= phi && phi <= start
        }
    }

    /// Outside the circle → false; the center itself → true.
    pub fn is_point_inside(&self, p: Point) -> bool {
        let d = p - self.circle.center();
        let r2 = d.r2();
        if r2 == 0.0 {
            return true;
        }
        if r2 > self.circle.r2() {
            return false;
        }
        self.is_angle_inside(d.angle())
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sector(center={}, r={}, arc={:.1}°, start_arm={:.1}°)",
            self.circle.center(),
            self.circle.radius(),
            self.arc.to_degrees(),
            self.start.to_degrees()
        )
    }
}

/// Scratch sector advanced by the sweep. Never shared; snapshot it instead.
#[derive(Clone, Debug)]
pub struct MovingSector {
    inner: Sector,
}

impl MovingSector {
    /// Immutable copy of the current position.
    #[inline]
    pub fn snapshot(&self) -> Sector {
        self.inner
    }

    #[inline]
    pub fn arc(&self) -> f64 {
        self.inner.arc
    }

    #[inline]
    pub fn start_arm(&self) -> f64 {
        self.inner.start
    }

    #[inline]
    pub fn end_arm(&self) -> f64 {
        self.inner.end_arm()
    }

    #[inline]
    pub fn end_arm_reduced(&self) -> f64 {
        self.inner.end_arm_reduced()
    }

    #[inline]
    pub fn set_start_arm(&mut self, angle: f64) {
        self.inner.start = reduce_angle(angle);
    }

    /// Place the trailing arm at `angle`; the start arm follows at `angle + arc`.
    #[inline]
    pub fn set_end_arm(&mut self, angle: f64) {
        self.inner.start = reduce_angle(angle + self.inner.arc);
    }

    /// Rotate clockwise by `theta`.
    #[inline]
    pub fn rotate(&mut self, theta: f64) {
        self.inner.start = reduce_angle(self.inner.start - theta);
    }

    #[inline]
    pub fn is_angle_inside(&self, phi: f64) -> bool {
        self.inner.is_angle_inside(phi)
    }
}

impl From<Sector> for MovingSector {
    #[inline]
    fn from(inner: Sector) -> Self {
        Self { inner }
    }
}
