//! Generator configuration (tolerances and layout constants).
//!
//! Policy
//! - `generate` always uses `VennCfg::default()`; the knobs exist for tests and
//!   benchmarks, not for callers of the fixture.
//! - Defaults are fixed constants. Changing them changes every fixture.

use crate::error::VennError;

/// Default sub-samples per cell axis (the classifier uses `S × S` samples).
pub(crate) const DEFAULT_SAMPLES_PER_AXIS: usize = 64;
/// Per-cell bound on `|sampled - exact|` area fraction at the default
/// sample count.
pub const SAMPLED_FRACTION_TOL: f64 = 2e-3;
/// Default half-width of the domain, in radii.
pub(crate) const DEFAULT_EXTENT_FACTOR: f64 = 2.0;
/// Default distance between circle centers, in radii.
pub(crate) const DEFAULT_CENTER_SPACING: f64 = 1.0;
/// Tolerance for "fractions of a cell sum to one".
pub const SUM_EPS: f64 = 1e-9;

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VennCfg {
    /// Sub-samples per cell axis for the region classifier.
    pub samples_per_axis: usize,
    /// Domain is `[-extent_factor * r, extent_factor * r]` in both axes.
    pub extent_factor: f64,
    /// Pairwise center distance as a multiple of the radius. Must lie in
    /// `(0, √3)` so the triple region is non-empty.
    pub center_spacing: f64,
}

impl Default for VennCfg {
    fn default() -> Self {
        Self {
            samples_per_axis: DEFAULT_SAMPLES_PER_AXIS,
            extent_factor: DEFAULT_EXTENT_FACTOR,
            center_spacing: DEFAULT_CENTER_SPACING,
        }
    }
}

impl VennCfg {
    /// Reject settings that would break the layout guarantees.
    pub fn validate(&self) -> Result<(), VennError> {
        if self.samples_per_axis == 0 {
            return Err(VennError::InvalidConfig(
                "samples_per_axis must be at least 1".into(),
            ));
        }
        let s = self.center_spacing;
        if !(s.is_finite() && s > 0.0 && s < 3f64.sqrt()) {
            return Err(VennError::InvalidConfig(format!(
                "center_spacing must lie in (0, sqrt(3)), got {s}"
            )));
        }
        // Circumradius of the center triangle plus one radius.
        let reach = s / 3f64.sqrt() + 1.0;
        if !(self.extent_factor.is_finite() && self.extent_factor > reach) {
            return Err(VennError::InvalidConfig(format!(
                "extent_factor {} does not contain the circles (reach {reach:.4})",
                self.extent_factor
            )));
        }
        Ok(())
    }
}
