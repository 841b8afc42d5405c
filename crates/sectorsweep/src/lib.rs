//! Angular sector sweep over planar point sets.
//!
//! A sector (circle, arc width, start arm) is rotated clockwise once around
//! its center; every distinct set of points it covers along the way is
//! reported as a `Group`, in angular order.
//!
//! Layout
//! - `angle`, `geom`: angle normalization, points, circles, sectors.
//! - `cyclic`: modular-index sequence the sweep runs on.
//! - `alias`, `group`: bearing aliases and the emitted result unit.
//! - `sweep`: the engine (`GroupSweep`, `find_all_groups`) and alignment pass.
//! - `rand`: seeded point clouds.
//!
//! API Policy
//! - Internal crate; no stable public API. `api` and `prelude` are the
//!   preferred import surfaces and may change together with the engine.

pub mod alias;
pub mod angle;
pub mod api;
pub mod cfg;
pub mod cyclic;
pub mod error;
pub mod geom;
pub mod group;
pub mod rand;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SweepCfg;
pub use error::{CyclicError, GeometryError, SweepError};
pub use geom::{Circle, Point, Sector};
pub use group::Group;
pub use nalgebra::Vector2 as Vec2;
pub use sweep::{find_all_groups, GroupSweep};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::alias::{Member, PointId};
    pub use crate::angle::{clockwise_distance, reduce_angle};
    pub use crate::cfg::SweepCfg;
    pub use crate::error::{GeometryError, SweepError};
    pub use crate::geom::{Circle, Point, Sector};
    pub use crate::group::Group;
    pub use crate::sweep::{find_all_groups, GroupSweep};
}
