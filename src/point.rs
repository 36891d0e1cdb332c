//! Point types for the four coordinate frames.
//!
//! A [`VirtualPoint`] owns exactly one [`BasePoint`]; the base point is the
//! durable identity and virtual coordinates are computed through the current
//! [`GridScale`] on every read. Project and screen points are plain value
//! types: a [`ProjectPoint`] is a projection of a virtual position under one
//! viewport state and goes stale as soon as that state changes.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

use crate::coord::{BaseCoord, ProjectCoord, ScreenCoord, VirtualCoord};
use crate::scale::GridScale;

/// A point on the logical base grid — the canonical model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BasePoint {
    pub x: BaseCoord,
    pub y: BaseCoord,
}

impl BasePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: BaseCoord(x), y: BaseCoord(y) }
    }

    /// Snap both components to the nearest integer grid line. Idempotent.
    pub fn align_to_grid(&mut self) {
        self.x = BaseCoord(self.x.0.round());
        self.y = BaseCoord(self.y.0.round());
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self { x: BaseCoord(self.x.0 + other.x.0), y: BaseCoord(self.y.0 + other.y.0) }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self { x: BaseCoord(self.x.0 - other.x.0), y: BaseCoord(self.y.0 - other.y.0) }
    }
}

/// Plain `{x, y}` record a virtual point can be rebuilt from.
///
/// Coordinates are in virtual units; omitted fields default to 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A display-space point backed by one owned [`BasePoint`].
///
/// No virtual coordinates are stored; `x`/`y` recompute `base * scale` on
/// every call, so a scale change is visible on the next read. Each virtual
/// point owns its base point outright. Cloning produces an independent
/// position, never a shared one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VirtualPoint {
    base: BasePoint,
}

impl VirtualPoint {
    /// Wrap a base-grid position directly.
    #[must_use]
    pub fn from_base(x: f64, y: f64) -> Self {
        Self { base: BasePoint::new(x, y) }
    }

    /// Build from virtual coordinates by converting down to base units.
    #[must_use]
    pub fn from_virtual(x: VirtualCoord, y: VirtualCoord, scale: &GridScale) -> Self {
        Self { base: BasePoint { x: scale.to_base(x), y: scale.to_base(y) } }
    }

    /// Rebuild from a plain `{x, y}` record in virtual units.
    #[must_use]
    pub fn from_record(record: PointRecord, scale: &GridScale) -> Self {
        Self::from_virtual(VirtualCoord(record.x), VirtualCoord(record.y), scale)
    }

    #[must_use]
    pub fn x(&self, scale: &GridScale) -> VirtualCoord {
        scale.to_virtual(self.base.x)
    }

    #[must_use]
    pub fn y(&self, scale: &GridScale) -> VirtualCoord {
        scale.to_virtual(self.base.y)
    }

    /// Write a virtual x through to the owned base point.
    pub fn set_x(&mut self, x: VirtualCoord, scale: &GridScale) {
        self.base.x = scale.to_base(x);
    }

    /// Write a virtual y through to the owned base point.
    pub fn set_y(&mut self, y: VirtualCoord, scale: &GridScale) {
        self.base.y = scale.to_base(y);
    }

    #[must_use]
    pub fn base_point(&self) -> BasePoint {
        self.base
    }

    pub fn set_base_point(&mut self, base: BasePoint) {
        self.base = base;
    }

    #[must_use]
    pub fn base_point_mut(&mut self) -> &mut BasePoint {
        &mut self.base
    }

    /// Whether both points read the same virtual coordinates under `scale`.
    #[must_use]
    pub fn coords_eq(&self, other: &Self, scale: &GridScale) -> bool {
        self.x(scale) == other.x(scale) && self.y(scale) == other.y(scale)
    }

    /// Centroid (arithmetic mean per axis) of the given points.
    ///
    /// Computed in base space, where the mean commutes with the scale
    /// factor, so no scale is needed. Returns `None` for an empty slice.
    #[must_use]
    pub fn average(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let count = points.len() as f64;
        let sum_x: f64 = points.iter().map(|p| p.base.x.0).sum();
        let sum_y: f64 = points.iter().map(|p| p.base.y.0).sum();
        Some(Self::from_base(sum_x / count, sum_y / count))
    }
}

/// A point in viewport space: the projection of a virtual position under one
/// viewport transform, valid only for the transform state it was computed
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectPoint {
    pub x: ProjectCoord,
    pub y: ProjectCoord,
}

impl ProjectPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: ProjectCoord(x), y: ProjectCoord(y) }
    }
}

/// A raw input-device point. Carries no conversion logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: ScreenCoord,
    pub y: ScreenCoord,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: ScreenCoord(x), y: ScreenCoord(y) }
    }
}
