//! Point aliasing: collapse points sharing one exact bearing.
//!
//! The sweep orders by angle only, so several input points on the same ray
//! would break the strict ordering it relies on. Each distinct bearing becomes
//! one `PointAlias` carrying every original point on that ray; aliases come
//! out sorted by angle descending (clockwise traversal order).

use std::collections::HashMap;
use std::fmt;

use crate::cyclic::CyclicSeq;
use crate::geom::{Circle, Point};

/// Stable identity of an original input point.
///
/// Coincident points are distinct entities; they differ by id, not coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An original point together with its identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Member {
    pub id: PointId,
    pub point: Point,
}

/// One bearing from the circle's center and the points lying on it.
#[derive(Clone, Debug, PartialEq)]
pub struct PointAlias {
    angle: f64,
    members: Vec<Member>,
}

impl PointAlias {
    fn new(angle: f64) -> Self {
        Self {
            angle,
            members: Vec::new(),
        }
    }

    /// Shared bearing, in (−π, π].
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Original points at this bearing, in insertion order.
    #[inline]
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

/// Hash key for an exact bearing; folds −0.0 onto 0.0.
#[inline]
fn bearing_key(angle: f64) -> u64 {
    (angle + 0.0).to_bits()
}

/// Filter `points` to the circle, alias by bearing, sort descending.
pub fn alias_points<I>(circle: &Circle, points: I) -> CyclicSeq<PointAlias>
where
    I: IntoIterator<Item = (PointId, Point)>,
{
    let mut slots: HashMap<u64, usize> = HashMap::new();
    let mut aliases: Vec<PointAlias> = Vec::new();
    for (id, point) in points {
        if !circle.contains(point) {
            continue;
        }
        let angle = circle.bearing(point);
        let slot = *slots.entry(bearing_key(angle)).or_insert_with(|| {
            aliases.push(PointAlias::new(angle + 0.0));
            aliases.len() - 1
        });
        aliases[slot].members.push(Member { id, point });
    }
    aliases.sort_by(|a, b| b.angle.total_cmp(&a.angle));
    tracing::trace!(aliases = aliases.len(), "aliased points");
    CyclicSeq::new(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(a: &PointAlias) -> Vec<usize> {
        a.members().iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn filters_groups_and_sorts_descending() {
        let c = Circle::new(Point::new(1.0, 1.0), 2.0).unwrap();
        let pts = [
            Point::new(2.0, 1.0),  // 0°
            Point::new(1.0, 2.0),  // 90°
            Point::new(3.0, 1.0),  // 0°, on the rim
            Point::new(9.0, 9.0),  // outside
            Point::new(0.0, 1.0),  // 180°
            Point::new(1.0, 0.0),  // -90°
            Point::new(1.5, 1.0),  // 0°
        ];
        let aliases = alias_points(&c, pts.iter().copied().enumerate().map(|(i, p)| (PointId(i), p)));
        assert_eq!(aliases.len(), 4);
        let angles: Vec<f64> = aliases.iter().map(|a| a.angle().to_degrees()).collect();
        assert!(angles.windows(2).all(|w| w[0] > w[1]), "{angles:?}");
        assert!((angles[0] - 180.0).abs() < 1e-9);
        assert_eq!(ids(&aliases.as_slice()[2]), vec![0, 2, 6]);
        assert_eq!(ids(&aliases.as_slice()[3]), vec![5]);
    }

    #[test]
    fn coincident_points_keep_distinct_ids() {
        let c = Circle::new(Point::origin(), 1.0).unwrap();
        let p = Point::new(0.5, 0.5);
        let aliases = alias_points(&c, [(PointId(7), p), (PointId(3), p)]);
        assert_eq!(aliases.len(), 1);
        assert_eq!(ids(aliases.get(0).unwrap()), vec![7, 3]);
    }

    #[test]
    fn negative_zero_bearing_shares_alias() {
        let c = Circle::new(Point::origin(), 2.0).unwrap();
        let aliases = alias_points(
            &c,
            [
                (PointId(0), Point::new(1.0, 0.0)),
                (PointId(1), Point::new(1.5, -0.0)),
            ],
        );
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get(0).unwrap().angle().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn nothing_inside_yields_empty() {
        let c = Circle::new(Point::origin(), 1.0).unwrap();
        let aliases = alias_points(
            &c,
            [
                (PointId(0), Point::new(3.0, 0.0)),
                (PointId(1), Point::new(f64::NAN, 0.0)),
            ],
        );
        assert!(aliases.is_empty());
    }
}
