//! Coordinate branding: one newtype per coordinate frame.
//!
//! Every frame stores plain `f64` values, but each gets its own wrapper so
//! a conversion between frames cannot be skipped by accident. Handing a
//! screen coordinate to a virtual-space operation is a type error.

/// A coordinate on the logical base grid (grid-alignable model units).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct BaseCoord(pub f64);

/// A coordinate on the virtual grid (base units scaled to display pixels).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct VirtualCoord(pub f64);

/// A coordinate in viewport space, after the pan/zoom transform.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProjectCoord(pub f64);

/// A raw device/input coordinate, unrelated to any surface transform.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScreenCoord(pub f64);

/// Selects which translation component a per-axis conversion uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}
