//! The sweep state machine.
//!
//! Cursors `first`/`afterlast` are logical (non-modular) indices into the
//! descending alias sequence; the window `[first, afterlast)` is the run of
//! aliases inside the sector. Each step moves the sector by the smallest
//! amount that changes the window: it either admits the trailing alias or
//! drops the leading one.
//!
//! The sweep stops when the window's content matches the first group again.
//! With wide arcs the same content can come back before that (several aliases
//! can lead a window holding every point); repeats are skipped so each group
//! is reported once, at the orientation where it first appeared.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::alias::{alias_points, PointAlias, PointId};
use crate::angle::clockwise_distance;
use crate::cfg::SweepCfg;
use crate::cyclic::CyclicSeq;
use crate::error::SweepError;
use crate::geom::{MovingSector, Point, Sector};
use crate::group::Group;

use super::align::align_window;

#[derive(Debug)]
enum Phase {
    Start,
    Running { origin: Group },
    Done,
}

/// Lazy, one-shot enumeration of the groups met during one sector revolution.
///
/// Yields `Err` at most once; the iterator is exhausted afterwards.
#[derive(Debug)]
pub struct GroupSweep {
    aliases: CyclicSeq<PointAlias>,
    sector: MovingSector,
    cfg: SweepCfg,
    first: isize,
    afterlast: isize,
    steps: usize,
    emitted: HashSet<Vec<PointId>>,
    phase: Phase,
}

impl GroupSweep {
    /// Sweep over `points`, identified by their position in the input.
    pub fn new<I>(sector: &Sector, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::with_ids(
            sector,
            points
                .into_iter()
                .enumerate()
                .map(|(i, p)| (PointId(i), p)),
        )
    }

    /// Sweep over caller-identified points. Ids must be unique.
    pub fn with_ids<I>(sector: &Sector, points: I) -> Self
    where
        I: IntoIterator<Item = (PointId, Point)>,
    {
        Self::with_cfg(sector, points, SweepCfg::default())
    }

    /// Sweep over caller-identified points with explicit configuration.
    pub fn with_cfg<I>(sector: &Sector, points: I, cfg: SweepCfg) -> Self
    where
        I: IntoIterator<Item = (PointId, Point)>,
    {
        let aliases = alias_points(sector.circle(), points);
        tracing::debug!(
            aliases = aliases.len(),
            arc_deg = sector.arc().to_degrees(),
            align = cfg.align,
            "sweep prepared"
        );
        Self {
            aliases,
            sector: MovingSector::from(*sector),
            cfg,
            first: 0,
            afterlast: 0,
            steps: 0,
            emitted: HashSet::new(),
            phase: Phase::Start,
        }
    }

    /// Number of distinct bearings inside the circle.
    #[inline]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    #[inline]
    pub fn cfg(&self) -> &SweepCfg {
        &self.cfg
    }

    fn angle_at(&self, i: isize) -> Result<f64, SweepError> {
        Ok(self.aliases.get(i)?.angle())
    }

    /// Group for the current window at the current sector position.
    fn form_window(&self) -> Result<Group, SweepError> {
        let window = self.aliases.between(self.first, self.afterlast, 1)?;
        let group = Group::form(self.sector.snapshot(), window)?;
        if !self.cfg.align {
            return Ok(group);
        }
        let aligned = align_window(
            group.sector(),
            &self.aliases,
            self.first,
            self.afterlast,
            &self.cfg,
        )?;
        Ok(group.with_sector(aligned))
    }

    /// First group of the sweep (or the only one when N ≤ 1).
    fn start(&mut self) -> Result<Option<Group>, SweepError> {
        let n = self.aliases.len();
        match n {
            0 => Ok(None),
            1 => {
                let a = self.angle_at(0)?;
                self.sector.set_start_arm(a + self.sector.arc() / 2.0);
                self.afterlast = 1;
                let g = Group::form(self.sector.snapshot(), self.aliases.iter())?;
                Ok(Some(g))
            }
            _ => {
                // pin the start arm on the largest bearing
                self.sector.set_start_arm(self.angle_at(0)?);
                self.first = 0;
                self.afterlast = 1;
                while (self.afterlast as usize) < n
                    && self.sector.is_angle_inside(self.angle_at(self.afterlast)?)
                {
                    self.afterlast += 1;
                }
                self.form_window().map(Some)
            }
        }
    }

    /// Advance the sector to the next breakpoint and update the window.
    fn step(&mut self) -> Result<(), SweepError> {
        let a1 = self.angle_at(self.first)?;
        let an1 = self.angle_at(self.afterlast)?;
        let alpha = clockwise_distance(self.sector.start_arm(), a1);
        let omega = clockwise_distance(self.sector.end_arm_reduced(), an1);

        if alpha >= omega {
            // p1 cannot leave before pn1 enters: admit pn1
            self.sector.set_end_arm(an1);
            self.afterlast += 1;
        } else {
            // tighten onto p1; membership is unchanged
            self.sector.set_start_arm(a1);
            let single =
                self.aliases.index(self.first)? == self.aliases.index(self.afterlast - 1)?;
            if single {
                // the window would empty out: slide onto pn1
                self.sector.set_end_arm(an1);
                self.first = self.afterlast;
                self.afterlast += 1;
            } else {
                let gamma = clockwise_distance(a1, self.angle_at(self.first + 1)?);
                let omega = clockwise_distance(self.sector.end_arm_reduced(), an1);
                let rho = gamma.min(omega) / 2.0;
                self.sector.rotate(rho);
                self.first += 1;
            }
        }
        self.steps += 1;
        tracing::trace!(
            step = self.steps,
            first = self.first,
            afterlast = self.afterlast,
            start_arm = self.sector.start_arm(),
            "sweep step"
        );
        Ok(())
    }

    fn advance(&mut self) -> Result<Option<Group>, SweepError> {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Done => Ok(None),
            Phase::Start => {
                let Some(g) = self.start()? else {
                    return Ok(None);
                };
                if self.aliases.len() >= 2 {
                    self.emitted.insert(g.key().to_vec());
                    self.phase = Phase::Running { origin: g.clone() };
                }
                Ok(Some(g))
            }
            Phase::Running { origin } => {
                let budget = self
                    .cfg
                    .step_budget_per_alias
                    .saturating_mul(self.aliases.len())
                    .saturating_add(2);
                loop {
                    if self.steps >= budget {
                        tracing::warn!(steps = self.steps, budget, "sweep step budget exhausted");
                        return Err(SweepError::NoClosure {
                            steps: self.steps,
                            aliases: self.aliases.len(),
                        });
                    }
                    self.step()?;
                    let g = self.form_window()?;
                    if g == origin {
                        tracing::debug!(steps = self.steps, "sweep closed");
                        return Ok(None);
                    }
                    if self.emitted.insert(g.key().to_vec()) {
                        self.phase = Phase::Running { origin };
                        return Ok(Some(g));
                    }
                    tracing::trace!(step = self.steps, "window repeats an earlier group");
                }
            }
        }
    }
}

impl Iterator for GroupSweep {
    type Item = Result<Group, SweepError>;

    fn next(&mut self) -> Option<Self::Item> {
        // `advance` leaves the phase at `Done` on every error path.
        self.advance().transpose()
    }
}

impl FusedIterator for GroupSweep {}

/// Run a sweep with default configuration and collect every group.
pub fn find_all_groups<I>(sector: &Sector, points: I) -> Result<Vec<Group>, SweepError>
where
    I: IntoIterator<Item = Point>,
{
    GroupSweep::new(sector, points).collect()
}
