//! 2D point with Cartesian/polar views over `nalgebra::Vector2`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use nalgebra::Vector2;

use crate::angle::reduce_angle;

/// Immutable 2D point. Equality is coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point(Vector2<f64>);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// Point at radius `r` and polar angle `phi` (radians) from the origin.
    #[inline]
    pub fn polar(r: f64, phi: f64) -> Self {
        let (s, c) = phi.sin_cos();
        Self(Vector2::new(r * c, r * s))
    }

    #[inline]
    pub fn origin() -> Self {
        Self(Vector2::zeros())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Squared distance from the origin.
    #[inline]
    pub fn r2(&self) -> f64 {
        self.0.norm_squared()
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.0.norm()
    }

    /// Polar angle in (−π, π]. The origin reports 0.
    #[inline]
    pub fn angle(&self) -> f64 {
        reduce_angle(self.0.y.atan2(self.0.x))
    }

    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.0.dot(&other.0)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        self.0 -= rhs.0;
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point(-self.0)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, k: f64) -> Point {
        Point(self.0 * k)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, p: Point) -> Point {
        Point(p.0 * self)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, k: f64) -> Point {
        Point(self.0 / k)
    }
}
