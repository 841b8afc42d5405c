//! Seeded point clouds for tests, benches and the CLI `sample` command.
//!
//! Model
//! - `count` points drawn uniformly over a disk of radius `radius * spread`
//!   around the circle's center (`spread > 1` puts some points outside).
//! - Radius is `R·sqrt(u)` so the density is uniform in area, not in radius.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG;
//!   the same token always reproduces the same cloud.

use crate::geom::{Circle, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next cloud of the same stream.
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    #[inline]
    pub(crate) fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(
            self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)),
        ))
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointCloudCfg {
    pub count: usize,
    /// Sampling disk radius relative to the circle's radius. Clamped to ≥ 0.
    pub spread: f64,
    /// Snap bearings to multiples of this step (radians) to force aliasing; `None` keeps them continuous.
    pub bearing_step: Option<f64>,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            spread: 1.0,
            bearing_step: None,
        }
    }
}

/// Draw a reproducible point cloud around `circle`'s center.
pub fn draw_point_cloud(circle: &Circle, cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r_max = circle.radius() * cfg.spread.max(0.0);
    let step = cfg.bearing_step.filter(|s| s.is_finite() && *s > 0.0);
    (0..cfg.count)
        .map(|_| {
            let r = r_max * rng.gen::<f64>().sqrt();
            let mut phi = rng.gen::<f64>() * std::f64::consts::TAU;
            if let Some(s) = step {
                phi = (phi / s).round() * s;
            }
            circle.center() + Point::polar(r, phi)
        })
        .collect()
}
