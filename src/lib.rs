//! Multi-frame coordinate core for a pannable/zoomable board canvas.
//!
//! Positions on the board live in one of four coordinate frames. The logical
//! base grid is the canonical model space; the virtual grid scales it by a
//! pixels-per-unit ratio; the project frame applies a viewport's pan/zoom on
//! top of that; and screen coordinates are raw device input, meaningless
//! until anchored to a bound surface. This crate converts between those
//! frames and animates pan/zoom transitions. It does not render, mutate the
//! DOM, or dispatch input events — the host wires events in and applies the
//! resulting transforms.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`coord`] | One branded newtype per coordinate frame |
//! | [`point`] | Base/virtual/project/screen point types and centroid |
//! | [`scale`] | Pixels-per-base-unit conversion ratio |
//! | [`viewport`] | Pan/zoom transform and anchored zoom re-centering |
//! | [`animate`] | Frame-scheduled interpolation with cancellation |
//! | [`surface`] | Surface and element-lookup collaborator seams |
//! | [`grid`] | Per-surface owning context tying the above together |
//! | [`input`] | Pointer event snapshot consumed by grid conversions |
//! | [`dom`] | Browser (`web-sys`) implementations of the host seams |
//! | [`consts`] | Shared numeric constants (zoom limits, durations) |

pub mod animate;
pub mod consts;
pub mod coord;
pub mod dom;
pub mod grid;
pub mod input;
pub mod point;
pub mod scale;
pub mod surface;
pub mod viewport;
