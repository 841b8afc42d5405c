//! Result unit of a sweep: a sector snapshot and the points it covers.

use crate::alias::{Member, PointAlias, PointId};
use crate::error::SweepError;
use crate::geom::{Point, Sector};

/// Immutable group of points covered by one sector position.
///
/// Equality compares the set of point ids plus the circle and arc; the arm
/// orientation is ignored, so two rotations covering the same points are the
/// same group.
#[derive(Clone, Debug)]
pub struct Group {
    sector: Sector,
    members: Vec<Member>,
    /// Sorted ids; used for equality.
    key: Vec<PointId>,
}

impl Group {
    /// Collect the members of `aliases` in order. Fails on a repeated id.
    pub fn form<'a, I>(sector: Sector, aliases: I) -> Result<Self, SweepError>
    where
        I: IntoIterator<Item = &'a PointAlias>,
    {
        let members: Vec<Member> = aliases
            .into_iter()
            .flat_map(|a| a.members().iter().copied())
            .collect();
        let mut key: Vec<PointId> = members.iter().map(|m| m.id).collect();
        key.sort_unstable();
        if let Some(w) = key.windows(2).find(|w| w[0] == w[1]) {
            return Err(SweepError::DuplicatePoint(w[0]));
        }
        Ok(Self {
            sector,
            members,
            key,
        })
    }

    #[inline]
    pub fn sector(&self) -> &Sector {
        &self.sector
    }

    #[inline]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.members.iter().map(|m| m.point)
    }

    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.members.iter().map(|m| m.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: PointId) -> bool {
        self.key.binary_search(&id).is_ok()
    }

    /// Sorted member ids.
    #[inline]
    pub(crate) fn key(&self) -> &[PointId] {
        &self.key
    }

    pub(crate) fn with_sector(mut self, sector: Sector) -> Self {
        self.sector = sector;
        self
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.sector.arc() == other.sector.arc()
            && self.sector.circle() == other.sector.circle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::alias_points;
    use crate::geom::Circle;

    fn sector_at(start: f64) -> Sector {
        let c = Circle::new(Point::origin(), 2.0).unwrap();
        Sector::with_arms(c, 1.0, start).unwrap()
    }

    #[test]
    fn form_flattens_aliases_in_order() {
        let c = *sector_at(0.0).circle();
        let aliases = alias_points(
            &c,
            [
                (PointId(0), Point::new(1.0, 0.0)),
                (PointId(1), Point::new(0.0, 1.0)),
                (PointId(2), Point::new(0.5, 0.0)),
            ],
        );
        let g = Group::form(sector_at(0.0), aliases.iter()).unwrap();
        let ids: Vec<usize> = g.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 0, 2]);
        assert_eq!(g.len(), 3);
        assert!(g.contains(PointId(2)));
        assert!(!g.contains(PointId(5)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let c = *sector_at(0.0).circle();
        let aliases = alias_points(
            &c,
            [
                (PointId(4), Point::new(1.0, 0.0)),
                (PointId(4), Point::new(0.0, 1.0)),
            ],
        );
        assert_eq!(
            Group::form(sector_at(0.0), aliases.iter()),
            Err(SweepError::DuplicatePoint(PointId(4)))
        );
    }

    #[test]
    fn equality_ignores_arm_and_member_order() {
        let c = *sector_at(0.0).circle();
        let aliases = alias_points(
            &c,
            [
                (PointId(0), Point::new(1.0, 0.0)),
                (PointId(1), Point::new(0.0, 1.0)),
            ],
        );
        let forward = Group::form(sector_at(0.0), aliases.iter()).unwrap();
        let backward = Group::form(sector_at(2.0), aliases.iter().rev()).unwrap();
        assert_eq!(forward, backward);

        let wider = Sector::with_arms(c, 1.5, 0.0).unwrap();
        assert_ne!(forward, Group::form(wider, aliases.iter()).unwrap());
        assert_ne!(
            forward,
            Group::form(sector_at(0.0), aliases.iter().take(1)).unwrap()
        );
    }
}
