//! Alignment pass: move an emitted sector's arms away from neighboring points.
//!
//! The window `[first, afterlast)` is fixed; only the arm placement changes.
//! `wing` is the slack per side if the sector were centered on the window,
//! `delta1`/`delta2` are the gaps to the aliases just outside the window.

use crate::alias::PointAlias;
use crate::angle::clockwise_distance;
use crate::cfg::SweepCfg;
use crate::cyclic::CyclicSeq;
use crate::error::SweepError;
use crate::geom::{MovingSector, Sector};

/// Re-place `sector`'s arms around the window `[first, afterlast)` of `aliases`.
///
/// Returns `sector` unchanged when the margins are too thin or when the new
/// placement would change which aliases are covered. The result depends only
/// on the window, so applying the pass twice gives the same sector.
pub fn align_window(
    sector: &Sector,
    aliases: &CyclicSeq<PointAlias>,
    first: isize,
    afterlast: isize,
    cfg: &SweepCfg,
) -> Result<Sector, SweepError> {
    let angle = |i: isize| aliases.get(i).map(PointAlias::angle);
    let a1 = angle(first)?;
    let an = angle(afterlast - 1)?;
    let teta = clockwise_distance(a1, an);
    let wing = (sector.arc() - teta) / 2.0;
    let delta1 = clockwise_distance(angle(first - 1)?, a1);
    let delta2 = clockwise_distance(an, angle(afterlast)?);

    if wing < cfg.align_min_wing || delta1 < cfg.align_min_gap || delta2 < cfg.align_min_gap {
        return Ok(*sector);
    }

    let mut m = MovingSector::from(*sector);
    if wing < delta1 && wing < delta2 {
        m.set_start_arm(a1 + wing);
    } else if wing < delta1 {
        m.set_end_arm(an - delta2 / 2.0);
    } else if wing < delta2 {
        m.set_start_arm(a1 + delta1 / 2.0);
    } else {
        return Err(SweepError::AlignmentInvariant {
            wing,
            delta1,
            delta2,
        });
    }

    let candidate = m.snapshot();
    if covers_same_window(&candidate, aliases, first, afterlast)? {
        Ok(candidate)
    } else {
        tracing::debug!(
            first,
            afterlast,
            wing,
            delta1,
            delta2,
            "alignment would change the window; keeping sector"
        );
        Ok(*sector)
    }
}

fn covers_same_window(
    sector: &Sector,
    aliases: &CyclicSeq<PointAlias>,
    first: isize,
    afterlast: isize,
) -> Result<bool, SweepError> {
    let inside = |i: isize| -> Result<bool, SweepError> {
        Ok(sector.is_angle_inside(aliases.get(i)?.angle()))
    };
    if !(inside(first)? && inside(afterlast - 1)?) {
        return Ok(false);
    }
    let full = (afterlast - first) as usize >= aliases.len();
    if full {
        return Ok(true);
    }
    Ok(!inside(first - 1)? && !inside(afterlast)?)
}
