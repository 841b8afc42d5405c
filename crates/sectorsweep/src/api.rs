//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for the CLI and experiments. Breaking changes are
//! allowed; prefer these re-exports over deep module paths.

// Angles and geometry
pub use crate::angle::{clockwise_distance, reduce_angle};
pub use crate::geom::{Circle, MovingSector, Point, Sector};
// Sweep
pub use crate::alias::{alias_points, Member, PointAlias, PointId};
pub use crate::cfg::SweepCfg;
pub use crate::cyclic::CyclicSeq;
pub use crate::error::{CyclicError, GeometryError, SweepError};
pub use crate::group::Group;
pub use crate::sweep::{align_window, find_all_groups, GroupSweep};
// Sampling
pub use crate::rand::{draw_point_cloud, PointCloudCfg, ReplayToken as CloudReplay};
