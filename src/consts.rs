//! Shared numeric constants for the coordinate core.

// ── Virtual grid ────────────────────────────────────────────────

/// Default pixels-per-base-unit ratio of the virtual grid.
pub const BASE_UNIT_PX: f64 = 10.0;

// ── Viewport zoom ───────────────────────────────────────────────

/// Lower bound for the viewport zoom factor.
pub const MIN_ZOOM_FACTOR: f64 = 0.001;

/// Upper bound for the viewport zoom factor.
pub const MAX_ZOOM_FACTOR: f64 = 2.0;

// ── Animation ───────────────────────────────────────────────────

/// Duration of animated pans, in milliseconds.
pub const PAN_ANIMATION_MS: f64 = 500.0;

/// Default duration of animated zooms, in milliseconds.
pub const ZOOM_ANIMATION_MS: f64 = 500.0;
