//! Pixels-per-base-unit conversion ratio between base and virtual grids.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use crate::consts::BASE_UNIT_PX;
use crate::coord::{BaseCoord, VirtualCoord};

/// Error raised when mutating a [`GridScale`] to an unusable ratio.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// The ratio is zero or non-finite. Rejected at the mutation site so
    /// `to_base` can never divide by zero.
    #[error("invalid pixels-per-base-unit ratio: {0}")]
    InvalidPxPerUnit(f64),
}

/// How many display pixels one base unit spans.
///
/// Owned by the grid context and passed explicitly into every conversion;
/// nothing caches the ratio, so a mutation is visible on the next read of
/// any virtual point. A held `GridScale` is always valid — invalid ratios
/// never get past the constructor or setter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScale {
    px_per_unit: f64,
}

impl Default for GridScale {
    fn default() -> Self {
        Self { px_per_unit: BASE_UNIT_PX }
    }
}

impl GridScale {
    /// Create a scale with the given ratio.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidPxPerUnit`] for zero or non-finite
    /// ratios.
    pub fn new(px_per_unit: f64) -> Result<Self, ScaleError> {
        check_ratio(px_per_unit)?;
        Ok(Self { px_per_unit })
    }

    #[must_use]
    pub fn px_per_unit(&self) -> f64 {
        self.px_per_unit
    }

    /// Change the ratio in place.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidPxPerUnit`] for zero or non-finite
    /// ratios; the previous ratio stays in effect.
    pub fn set_px_per_unit(&mut self, px_per_unit: f64) -> Result<(), ScaleError> {
        check_ratio(px_per_unit)?;
        self.px_per_unit = px_per_unit;
        Ok(())
    }

    #[must_use]
    pub fn to_virtual(&self, base: BaseCoord) -> VirtualCoord {
        VirtualCoord(base.0 * self.px_per_unit)
    }

    #[must_use]
    pub fn to_base(&self, virt: VirtualCoord) -> BaseCoord {
        BaseCoord(virt.0 / self.px_per_unit)
    }
}

fn check_ratio(px_per_unit: f64) -> Result<(), ScaleError> {
    if !px_per_unit.is_finite() || px_per_unit.abs() < f64::EPSILON {
        return Err(ScaleError::InvalidPxPerUnit(px_per_unit));
    }
    Ok(())
}
