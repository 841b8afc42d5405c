//! Sweep configuration.
//!
//! Policy
//! - Defaults are fixed constants; `SweepCfg::default()` is what callers
//!   normally want. Override fields only for controlled experiments.

/// Smallest per-side slack (radians) for which the alignment pass re-centers: 1°.
pub(crate) const ALIGN_MIN_WING: f64 = std::f64::consts::PI / 180.0;
/// Smallest neighbor gap (radians) for which the alignment pass moves the arms: 2°.
pub(crate) const ALIGN_MIN_GAP: f64 = 2.0 * std::f64::consts::PI / 180.0;
/// A revolution takes at most 2N steps; the budget leaves headroom.
pub(crate) const STEP_BUDGET_PER_ALIAS: usize = 4;

/// Knobs of one sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCfg {
    /// Run the alignment pass on every emitted sector.
    pub align: bool,
    pub align_min_wing: f64,
    pub align_min_gap: f64,
    /// Steps allowed per alias before the sweep gives up with `NoClosure`.
    pub step_budget_per_alias: usize,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            align: false,
            align_min_wing: ALIGN_MIN_WING,
            align_min_gap: ALIGN_MIN_GAP,
            step_budget_per_alias: STEP_BUDGET_PER_ALIAS,
        }
    }
}

impl SweepCfg {
    /// Defaults with the alignment pass switched on.
    pub fn aligned() -> Self {
        Self {
            align: true,
            ..Self::default()
        }
    }
}
