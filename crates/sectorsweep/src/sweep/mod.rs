//! Sector sweep: enumerate the groups a fixed-width wedge meets in one turn.
//!
//! Purpose
//! - Rotate a sector clockwise around its circle's center and report, in
//!   angular order, every distinct set of points it covers.
//! - Stay lazy: `GroupSweep` is a pull-based iterator; no work happens ahead
//!   of demand and dropping it cancels the sweep.
//!
//! Pipeline
//! - `alias::alias_points` filters to the circle and collapses equal bearings.
//! - `engine::GroupSweep` walks the descending aliases as a cyclic sequence.
//! - `align::align_window` (optional, `SweepCfg::align`) re-places each
//!   emitted sector between its neighbors without changing membership.
//!
//! Code cross-refs: `geom::{Sector, MovingSector}`, `cyclic::CyclicSeq`, `group::Group`.

mod align;
mod engine;

pub use align::align_window;
pub use engine::{find_all_groups, GroupSweep};
